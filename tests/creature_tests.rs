use rand::rngs::SmallRng;
use rand::SeedableRng;
use squirm::head::{pointer_attraction, steering};
use squirm::{
    Creature, CreatureParams, CreatureRanges, DynamicsConfig, HeadInput, NoOpStepObserver,
    ParameterRange, Vec2,
};

fn params(length: usize, size: f64, tapering: f64, strength: f64, activeness: f64) -> CreatureParams<f64> {
    CreatureParams { length, size, tapering, strength, activeness, color: [0.5, 0.5, 0.5] }
}

fn size_range() -> ParameterRange<f64> {
    ParameterRange::new(0.005, 0.02).unwrap()
}

#[test]
fn sizes_taper_down_the_chain() {
    let c = Creature::new(Vec2::zero(), &params(12, 0.02, 0.3, 1.0, 0.003), &size_range());
    let sizes: Vec<f64> = c.segments().iter().map(|s| s.size()).collect();
    for w in sizes.windows(2) {
        assert!(w[1] < w[0], "sizes should strictly decrease: {:?}", sizes);
    }
    for (i, s) in sizes.iter().enumerate() {
        let expected = 0.02 * (-0.3 * i as f64).exp();
        assert!((s - expected).abs() < 1e-15);
    }
}

#[test]
fn zero_tapering_keeps_sizes_constant() {
    let c = Creature::new(Vec2::zero(), &params(7, 0.01, 0.0, 1.0, 0.003), &size_range());
    assert!(c.segments().iter().all(|s| s.size() == 0.01));
}

#[test]
fn mass_follows_bulk_over_strength() {
    let p = params(3, 0.01, 0.0, 0.5, 0.003);
    let c = Creature::new(Vec2::zero(), &p, &size_range());
    // bulk = 3 * 0.01 / 0.02 = 1.5, k = 0.5 * 0.01 / 0.005 = 1.0
    assert!((c.mass() - 1.5).abs() < 1e-12);
}

#[test]
fn sampled_creatures_have_positive_mass() {
    let ranges = CreatureRanges::<f64>::new();
    let mut rng = SmallRng::seed_from_u64(11);
    for _ in 0..100 {
        let c = Creature::spawn(Vec2::zero(), &ranges, &mut rng);
        assert!(c.mass() > 0.0);
        assert!(c.len() >= 5 && c.len() < 15, "length {}", c.len());
        assert!(ranges.activeness.contains(c.activeness()));
    }
}

#[test]
fn length_is_at_least_one() {
    let ranges = CreatureRanges::<f64>::new().with_length(ParameterRange::new(1.0, 1.5).unwrap());
    let mut rng = SmallRng::seed_from_u64(2);
    let c = Creature::spawn(Vec2::zero(), &ranges, &mut rng);
    assert_eq!(c.len(), 1);
    assert!(!c.is_empty());
}

#[test]
fn idle_creature_at_centre_stays_put() {
    let c0 = Creature::new(Vec2::zero(), &params(8, 0.01, 0.2, 1.0, 0.0), &size_range());
    let mut c = c0.clone();
    // no low-speed kick
    let dynamics = DynamicsConfig::new().with_limits(5.0, -1.0, 1.0);
    let mut rng = SmallRng::seed_from_u64(5);
    let input = HeadInput {
        dt: 0.005,
        pointer_position: Vec2::new(0.5, 0.5),
        pointer_active: false,
        bounds: Vec2::new(1.0, 1.0),
    };
    for _ in 0..500 {
        c.update(&input, &dynamics, &mut rng, &mut NoOpStepObserver);
    }
    for (a, b) in c.segments().iter().zip(c0.segments()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, Vec2::zero());
    }
    assert_eq!(c.acceleration(), Vec2::zero());
}

#[test]
fn clamps_hold_after_every_update() {
    let dynamics = DynamicsConfig::new().with_f_mouse(1e9).with_f_active(1e9);
    let mut rng = SmallRng::seed_from_u64(8);
    let mut c = Creature::new(Vec2::new(0.99, -0.99), &params(6, 0.02, 0.1, 0.5, 0.9), &size_range());
    let input = HeadInput {
        dt: 0.005,
        pointer_position: Vec2::new(-50.0, 30.0),
        pointer_active: true,
        bounds: Vec2::new(1.0, 1.0),
    };
    for _ in 0..1000 {
        c.update(&input, &dynamics, &mut rng, &mut NoOpStepObserver);
        assert!(c.acceleration().length() <= dynamics.a_max + 1e-12);
        assert!(c.head().velocity.length() <= dynamics.v_max + 1e-12);
    }
}

#[test]
fn pointer_pull_on_unit_mass_equals_f_mouse() {
    let dynamics = DynamicsConfig::<f64>::permissive();
    let sizes = ParameterRange::constant(0.01);
    let mut c = Creature::new(Vec2::zero(), &params(1, 0.01, 0.3, 1.0, 0.0), &sizes);
    assert_eq!(c.mass(), 1.0);

    let input = HeadInput {
        dt: 0.1,
        pointer_position: Vec2::new(0.0, 1.0),
        pointer_active: true,
        bounds: Vec2::new(4.0, 4.0),
    };

    let da = steering(c.head(), &input, c.mass(), None, &dynamics);
    assert_eq!(da, Vec2::new(0.0, dynamics.f_mouse));
    assert_eq!(pointer_attraction(Vec2::zero(), input.pointer_position, 1.0, 25.0), da);

    let mut rng = SmallRng::seed_from_u64(1);
    c.update(&input, &dynamics, &mut rng, &mut NoOpStepObserver);
    let a = c.acceleration();
    assert_eq!(a.x, 0.0);
    assert!((a.y - dynamics.f_mouse * input.dt).abs() < 1e-12);
    assert_eq!(c.len(), 1);
}

#[test]
fn fresh_creature_gets_first_impulse() {
    let dynamics = DynamicsConfig::new();
    let mut rng = SmallRng::seed_from_u64(21);
    let mut c = Creature::new(Vec2::zero(), &params(4, 0.01, 0.2, 1.0, 0.002), &size_range());
    assert_eq!(c.activity(), 0.0);
    let input = HeadInput {
        dt: 0.005,
        pointer_position: Vec2::zero(),
        pointer_active: false,
        bounds: Vec2::new(1.0, 1.0),
    };
    c.update(&input, &dynamics, &mut rng, &mut NoOpStepObserver);
    assert_eq!(c.activity(), 0.0);
    assert!(c.acceleration().length() > 0.0);
    assert!(c.head().position != Vec2::zero());
}

#[test]
fn resting_creature_is_kicked_back_into_motion() {
    let mut c = Creature::new(Vec2::new(0.3, 0.0), &params(5, 0.01, 0.2, 1.0, 0.0), &size_range());
    let dynamics = DynamicsConfig::new();
    let mut rng = SmallRng::seed_from_u64(13);
    let input = HeadInput {
        dt: 0.005,
        pointer_position: Vec2::zero(),
        pointer_active: false,
        bounds: Vec2::new(1.0, 1.0),
    };
    for _ in 0..100 {
        c.update(&input, &dynamics, &mut rng, &mut NoOpStepObserver);
    }
    assert!(c.head().velocity.length() > 0.0);
    assert!(c.head().position != Vec2::new(0.3, 0.0));
}
