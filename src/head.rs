//! Head dynamics: steering forces and the head integrator.
//!
//! Each force term is a pure function returning an acceleration
//! contribution. [`steering`] sums them, and [`integrate_head`] applies the
//! sum to the persistent acceleration, velocity and position of the head.

use crate::config::DynamicsConfig;
use crate::float::Float;
use crate::segment::Segment;
use crate::vec::Vec2;
use rand::Rng;

/// Per-substep input shared by every force term.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeadInput<F: Float> {
    pub dt: F,
    pub pointer_position: Vec2<F>,
    pub pointer_active: bool,
    /// Half-extents of the world rectangle, centred on the origin.
    pub bounds: Vec2<F>,
}

/// Pull toward the pointer, saturating at one world unit of distance.
///
/// Returns zero when the pointer sits exactly on the head.
pub fn pointer_attraction<F: Float>(head: Vec2<F>, pointer: Vec2<F>, mass: F, f_mouse: F) -> Vec2<F> {
    let dir = pointer - head;
    let dist = dir.length();
    dir.normalize_or_zero().scale(dist.min(F::one()) * f_mouse / mass)
}

/// Soft repulsion from the world edges.
///
/// Each axis has a dead zone around the centre; within `threshold` of the
/// edge (as a fraction of the half-extent) the push ramps up linearly.
pub fn boundary_avoidance<F: Float>(
    position: Vec2<F>,
    bounds: Vec2<F>,
    mass: F,
    dynamics: &DynamicsConfig<F>,
    dt: F,
) -> Vec2<F> {
    let dead_zone = F::one() - dynamics.boundary_threshold;
    let ramp = |p: F, b: F| ((p.abs() / b).clamp(F::zero(), F::one()) - dead_zone).max(F::zero());
    let push = Vec2::new(
        -position.x.signum() * ramp(position.x, bounds.x),
        -position.y.signum() * ramp(position.y, bounds.y),
    );
    push.scale(dynamics.boundary_force / mass * dt)
}

/// Random impulse of magnitude `(0.5 + u/2) * f_active / mass` in a uniformly
/// random direction.
pub fn activity_impulse<F: Float, R: Rng + ?Sized>(rng: &mut R, mass: F, f_active: F) -> Vec2<F> {
    let u = F::from_f64(rng.gen::<f64>());
    let magnitude = (F::half() + u * F::half()) * f_active / mass;
    let angle = F::from_f64(rng.gen::<f64>()) * F::tau();
    Vec2::from_angle(angle).scale(magnitude)
}

/// Stochastic timer behind the bursty wandering of a creature.
///
/// Grows by a random fraction of `activeness` each substep and fires once it
/// reaches 1, or whenever the head has almost stopped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ActivityTimer<F: Float> {
    value: F,
}

impl<F: Float> ActivityTimer<F> {
    /// A timer at rest. It fires once activity accumulates to 1, or on the
    /// first tick where the head is slow enough.
    pub fn new() -> Self {
        ActivityTimer { value: F::zero() }
    }

    pub fn value(&self) -> F {
        self.value
    }

    /// Advance the timer. Returns `true` and resets to zero when it fires.
    ///
    /// With zero activeness the timer only fires through the low-speed kick.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R, activeness: F, speed: F, v_min: F) -> bool {
        self.value = self.value + F::from_f64(rng.gen::<f64>()) * activeness;
        if F::one() <= self.value || speed <= v_min {
            self.value = F::zero();
            true
        } else {
            false
        }
    }
}

impl<F: Float> Default for ActivityTimer<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Net steering acceleration on the head for one substep.
///
/// `impulse` is the random activity contribution, if the timer fired.
pub fn steering<F: Float>(
    head: &Segment<F>,
    input: &HeadInput<F>,
    mass: F,
    impulse: Option<Vec2<F>>,
    dynamics: &DynamicsConfig<F>,
) -> Vec2<F> {
    let mut da = Vec2::zero();
    if input.pointer_active {
        da += pointer_attraction(head.position, input.pointer_position, mass, dynamics.f_mouse);
    }
    if let Some(impulse) = impulse {
        da += impulse;
    }
    da + boundary_avoidance(head.position, input.bounds, mass, dynamics, input.dt)
}

/// Apply a steering acceleration to the head.
///
/// Acceleration and velocity are clamped before the position update, then
/// both decay by `1 / (1 + rate * dt)`.
pub fn integrate_head<F: Float>(
    head: &mut Segment<F>,
    acceleration: &mut Vec2<F>,
    da: Vec2<F>,
    dt: F,
    dynamics: &DynamicsConfig<F>,
) {
    *acceleration = (*acceleration + da.scale(dt)).clamp_length(dynamics.a_max);
    head.velocity = (head.velocity + acceleration.scale(dt)).clamp_length(dynamics.v_max);

    head.position += head.velocity.scale(dt) + acceleration.scale(dt * dt / F::two());

    *acceleration = acceleration.scale(F::one() / (F::one() + dynamics.a_damp * dt));
    head.velocity = head.velocity.scale(F::one() / (F::one() + dynamics.v_damp * dt));
}
