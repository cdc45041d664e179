//! Worm-like creatures: a force-driven head trailed by a tapered chain.

use crate::chain::solve_chain;
use crate::config::{CreatureRanges, DynamicsConfig};
use crate::float::Float;
use crate::head::{activity_impulse, integrate_head, steering, ActivityTimer, HeadInput};
use crate::observer::StepObserver;
use crate::range::ParameterRange;
use crate::segment::Segment;
use crate::vec::Vec2;
use alloc::vec::Vec;
use rand::Rng;

/// Opaque RGB colour tag carried for the renderer.
pub type Color = [f32; 3];

/// Style and personality of one creature.
#[derive(Clone, Debug, PartialEq)]
pub struct CreatureParams<F: Float> {
    /// Number of segments, at least 1.
    pub length: usize,
    /// Head radius.
    pub size: F,
    pub tapering: F,
    pub strength: F,
    pub activeness: F,
    pub color: Color,
}

impl<F: Float> CreatureParams<F> {
    /// Draw parameters from the configured ranges. The length is floored
    /// and kept at one segment or more.
    pub fn sample<R: Rng + ?Sized>(ranges: &CreatureRanges<F>, rng: &mut R) -> Self {
        let length = ranges.length.sample(rng).floor().to_f64().max(1.0) as usize;
        let size = ranges.size.sample(rng);
        let strength = ranges.strength.sample(rng);
        let tapering = ranges.tapering.sample(rng);
        let activeness = ranges.activeness.sample(rng);
        let color = [rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>()];
        CreatureParams { length, size, tapering, strength, activeness, color }
    }
}

/// A chain of segments led by a head with its own dynamics.
///
/// Segment 0 is the head. The chain never grows or shrinks.
#[derive(Clone, Debug)]
pub struct Creature<F: Float> {
    segments: Vec<Segment<F>>,
    color: Color,
    acceleration: Vec2<F>,
    activity: ActivityTimer<F>,
    activeness: F,
    mass: F,
}

impl<F: Float> Creature<F> {
    /// Build a creature with every segment stacked on `position`.
    ///
    /// `size_range` normalises the body bulk in the mass formula:
    /// `mass = sum(size_i / size_max) / (strength * size_0 / size_min)`.
    pub fn new(position: Vec2<F>, params: &CreatureParams<F>, size_range: &ParameterRange<F>) -> Self {
        let length = params.length.max(1);
        let segments: Vec<Segment<F>> = (0..length)
            .map(|i| {
                let size = params.size * (-params.tapering * F::from_f64(i as f64)).exp();
                Segment::new(size, position)
            })
            .collect();

        let mut bulk = F::zero();
        for s in segments.iter() {
            bulk = bulk + s.size() / size_range.max();
        }
        // Strength is relative to head size only, so longer creatures are
        // weaker for the same head.
        let k_mass = params.strength * params.size / size_range.min();

        Creature {
            segments,
            color: params.color,
            acceleration: Vec2::zero(),
            activity: ActivityTimer::new(),
            activeness: params.activeness,
            mass: bulk / k_mass,
        }
    }

    /// Sample parameters from `ranges` and build a creature at `position`.
    pub fn spawn<R: Rng + ?Sized>(position: Vec2<F>, ranges: &CreatureRanges<F>, rng: &mut R) -> Self {
        let params = CreatureParams::sample(ranges, rng);
        Self::new(position, &params, &ranges.size)
    }

    /// Advance by a single substep: head dynamics, then the tail.
    pub fn update<R: Rng + ?Sized, O: StepObserver>(
        &mut self,
        input: &HeadInput<F>,
        dynamics: &DynamicsConfig<F>,
        rng: &mut R,
        observer: &mut O,
    ) {
        let dt = input.dt;
        let speed = self.segments[0].velocity.length();

        let impulse = if self.activity.tick(rng, self.activeness, speed, dynamics.v_min) {
            let impulse = activity_impulse(rng, self.mass, dynamics.f_active);
            observer.on_activity_impulse(impulse.length().to_f64());
            Some(impulse)
        } else {
            None
        };

        let da = steering(&self.segments[0], input, self.mass, impulse, dynamics);
        integrate_head(&mut self.segments[0], &mut self.acceleration, da, dt, dynamics);

        solve_chain(&mut self.segments, dt, dynamics.k_spring, dynamics.v_damp);
    }

    pub fn segments(&self) -> &[Segment<F>] {
        &self.segments
    }

    pub fn head(&self) -> &Segment<F> {
        &self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a creature has at least its head.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn acceleration(&self) -> Vec2<F> {
        self.acceleration
    }

    pub fn activity(&self) -> F {
        self.activity.value()
    }

    pub fn activeness(&self) -> F {
        self.activeness
    }

    pub fn mass(&self) -> F {
        self.mass
    }
}
