//! Closed intervals used to draw per-creature style and personality.

use crate::error::SwarmError;
use crate::float::Float;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]` with uniform sampling.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange<F: Float> {
    min: F,
    max: F,
}

impl<F: Float> ParameterRange<F> {
    /// Build a range, rejecting `min > max` and non-finite endpoints.
    pub fn new(min: F, max: F) -> Result<Self, SwarmError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(SwarmError::InvalidRange {
                name: "range",
                min: min.to_f64(),
                max: max.to_f64(),
            });
        }
        Ok(ParameterRange { min, max })
    }

    /// Range with both endpoints multiplied by `scale`.
    pub fn scaled(min: F, max: F, scale: F) -> Result<Self, SwarmError> {
        Self::new(min * scale, max * scale)
    }

    /// Degenerate range that always samples `value`.
    pub fn constant(value: F) -> Self {
        ParameterRange { min: value, max: value }
    }

    /// Unchecked constructor for compile-time defaults.
    pub(crate) fn from_bounds(min: F, max: F) -> Self {
        ParameterRange { min, max }
    }

    pub fn min(&self) -> F { self.min }

    pub fn max(&self) -> F { self.max }

    pub fn contains(&self, value: F) -> bool {
        self.min <= value && value <= self.max
    }

    /// Draw a value uniformly from the interval.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        let t = F::from_f64(rng.gen::<f64>());
        self.min + (self.max - self.min) * t
    }

    pub(crate) fn check(&self, name: &'static str) -> Result<(), SwarmError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(SwarmError::InvalidRange {
                name,
                min: self.min.to_f64(),
                max: self.max.to_f64(),
            });
        }
        Ok(())
    }
}
