//! Immutable simulation configuration.
//!
//! A [`SwarmConfig`] is built once and passed by reference into creature
//! construction and the stepper. All types implement `serde::Deserialize`
//! with `#[serde(default)]`, so a tuning file only needs the keys it wants
//! to override.
//!
//! # Builder Pattern
//! ```
//! use squirm::config::{DynamicsConfig, SwarmConfig};
//!
//! let config: SwarmConfig<f64> = SwarmConfig::new()
//!     .with_population(40)
//!     .with_dynamics(DynamicsConfig::new().with_k_spring(20.0).with_sim_max_dt(0.004));
//! assert!(config.validate().is_ok());
//! ```

use crate::error::SwarmError;
use crate::float::Float;
use crate::range::ParameterRange;
use serde::{Deserialize, Serialize};

/// Ranges the style and personality of each creature is drawn from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatureRanges<F: Float> {
    /// Head radius in world units. Also normalises body bulk for mass.
    pub size: ParameterRange<F>,
    /// Number of segments, floored after sampling.
    pub length: ParameterRange<F>,
    /// Exponential radius falloff per segment.
    pub tapering: ParameterRange<F>,
    /// Activity timer gain per substep.
    pub activeness: ParameterRange<F>,
    /// Head-size-relative strength, divides mass.
    pub strength: ParameterRange<F>,
}

impl<F: Float> CreatureRanges<F> {
    pub fn new() -> Self {
        let r = |min: f64, max: f64| ParameterRange::from_bounds(F::from_f64(min), F::from_f64(max));
        CreatureRanges {
            size: r(0.005, 0.02),
            length: r(5.0, 15.0),
            tapering: r(0.1, 0.5),
            activeness: r(0.001, 0.005),
            strength: r(0.5, 1.0),
        }
    }

    pub fn with_size(mut self, size: ParameterRange<F>) -> Self {
        self.size = size;
        self
    }

    pub fn with_length(mut self, length: ParameterRange<F>) -> Self {
        self.length = length;
        self
    }

    pub fn with_tapering(mut self, tapering: ParameterRange<F>) -> Self {
        self.tapering = tapering;
        self
    }

    pub fn with_activeness(mut self, activeness: ParameterRange<F>) -> Self {
        self.activeness = activeness;
        self
    }

    pub fn with_strength(mut self, strength: ParameterRange<F>) -> Self {
        self.strength = strength;
        self
    }

    pub fn validate(&self) -> Result<(), SwarmError> {
        self.size.check("size")?;
        self.length.check("length")?;
        self.tapering.check("tapering")?;
        self.activeness.check("activeness")?;
        self.strength.check("strength")?;

        if self.size.min() <= F::zero() {
            return Err(SwarmError::NonPositive { name: "size.min", value: self.size.min().to_f64() });
        }
        if self.length.min() < F::one() {
            return Err(SwarmError::InvalidLength { min: self.length.min().to_f64() });
        }
        if self.strength.min() <= F::zero() {
            return Err(SwarmError::NonPositive {
                name: "strength.min",
                value: self.strength.min().to_f64(),
            });
        }
        if self.tapering.min() < F::zero() {
            return Err(SwarmError::Negative { name: "tapering.min", value: self.tapering.min().to_f64() });
        }
        if self.activeness.min() < F::zero() {
            return Err(SwarmError::Negative {
                name: "activeness.min",
                value: self.activeness.min().to_f64(),
            });
        }
        Ok(())
    }
}

impl<F: Float> Default for CreatureRanges<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Force constants, damping rates and limits of the motion model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicsConfig<F: Float> {
    /// Tail spring gain: segment speed per unit of stretch. Default: 15.
    pub k_spring: F,
    /// Pointer pull at one world unit of distance. Default: 25.
    pub f_mouse: F,
    /// Random impulse scale. Default: 500.
    pub f_active: F,
    /// Boundary repulsion gain. Default: 10000.
    pub boundary_force: F,
    /// Fraction of each half-extent, measured from the edge, where
    /// boundary repulsion ramps up. Default: 0.1.
    pub boundary_threshold: F,
    /// Head acceleration decay rate. Default: 4.
    pub a_damp: F,
    /// Velocity decay rate, head and tail. Default: 2.
    pub v_damp: F,
    /// Head acceleration limit. Default: 5.
    pub a_max: F,
    /// Head speed at or below which a random impulse is forced. Default: 0.005.
    pub v_min: F,
    /// Head speed limit. Default: 1.
    pub v_max: F,
    /// Largest substep the stepper will take. Default: 0.005.
    pub sim_max_dt: F,
}

impl<F: Float> DynamicsConfig<F> {
    pub fn new() -> Self {
        let f = F::from_f64;
        DynamicsConfig {
            k_spring: f(15.0),
            f_mouse: f(25.0),
            f_active: f(500.0),
            boundary_force: f(10000.0),
            boundary_threshold: f(0.1),
            a_damp: f(4.0),
            v_damp: f(2.0),
            a_max: f(5.0),
            v_min: f(0.005),
            v_max: f(1.0),
            sim_max_dt: f(0.005),
        }
    }

    /// No damping, no clamps, no forced impulses. Forces keep their defaults.
    pub fn permissive() -> Self {
        DynamicsConfig {
            a_damp: F::zero(),
            v_damp: F::zero(),
            a_max: F::infinity(),
            v_max: F::infinity(),
            v_min: -F::one(),
            ..Self::new()
        }
    }

    pub fn with_k_spring(mut self, k_spring: F) -> Self {
        self.k_spring = k_spring;
        self
    }

    pub fn with_f_mouse(mut self, f_mouse: F) -> Self {
        self.f_mouse = f_mouse;
        self
    }

    pub fn with_f_active(mut self, f_active: F) -> Self {
        self.f_active = f_active;
        self
    }

    pub fn with_boundary(mut self, force: F, threshold: F) -> Self {
        self.boundary_force = force;
        self.boundary_threshold = threshold;
        self
    }

    pub fn with_damping(mut self, a_damp: F, v_damp: F) -> Self {
        self.a_damp = a_damp;
        self.v_damp = v_damp;
        self
    }

    pub fn with_limits(mut self, a_max: F, v_min: F, v_max: F) -> Self {
        self.a_max = a_max;
        self.v_min = v_min;
        self.v_max = v_max;
        self
    }

    pub fn with_sim_max_dt(mut self, sim_max_dt: F) -> Self {
        self.sim_max_dt = sim_max_dt;
        self
    }

    pub fn validate(&self) -> Result<(), SwarmError> {
        if !(self.sim_max_dt > F::zero()) || !self.sim_max_dt.is_finite() {
            return Err(SwarmError::NonPositive { name: "sim_max_dt", value: self.sim_max_dt.to_f64() });
        }
        let non_negative = [
            ("k_spring", self.k_spring),
            ("f_mouse", self.f_mouse),
            ("f_active", self.f_active),
            ("boundary_force", self.boundary_force),
            ("a_damp", self.a_damp),
            ("v_damp", self.v_damp),
            ("a_max", self.a_max),
            ("v_max", self.v_max),
        ];
        for (name, value) in non_negative {
            if !(value >= F::zero()) {
                return Err(SwarmError::Negative { name, value: value.to_f64() });
            }
        }
        let t = self.boundary_threshold;
        if !(t >= F::zero() && t <= F::one()) {
            return Err(SwarmError::OutOfUnitInterval { name: "boundary_threshold", value: t.to_f64() });
        }
        Ok(())
    }
}

impl<F: Float> Default for DynamicsConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete configuration of a swarm run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig<F: Float> {
    /// Number of creatures spawned. Default: 150.
    pub population: usize,
    pub ranges: CreatureRanges<F>,
    pub dynamics: DynamicsConfig<F>,
}

impl<F: Float> SwarmConfig<F> {
    pub fn new() -> Self {
        SwarmConfig {
            population: 150,
            ranges: CreatureRanges::new(),
            dynamics: DynamicsConfig::new(),
        }
    }

    pub fn with_population(mut self, population: usize) -> Self {
        self.population = population;
        self
    }

    pub fn with_ranges(mut self, ranges: CreatureRanges<F>) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn with_dynamics(mut self, dynamics: DynamicsConfig<F>) -> Self {
        self.dynamics = dynamics;
        self
    }

    pub fn validate(&self) -> Result<(), SwarmError> {
        self.ranges.validate()?;
        self.dynamics.validate()
    }
}

impl<F: Float> Default for SwarmConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
