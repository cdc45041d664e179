//! Error types for configuration and parameter validation.
//!
//! The per-frame simulation never fails; only building ranges and
//! configurations can be rejected.

use core::fmt;

/// Errors raised while validating simulation parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SwarmError {
    /// A range has `min > max` or a non-finite endpoint.
    InvalidRange { name: &'static str, min: f64, max: f64 },
    /// A value must be strictly positive.
    NonPositive { name: &'static str, value: f64 },
    /// A value must not be negative.
    Negative { name: &'static str, value: f64 },
    /// A value must lie in [0, 1].
    OutOfUnitInterval { name: &'static str, value: f64 },
    /// Creatures need at least one segment.
    InvalidLength { min: f64 },
}

impl fmt::Display for SwarmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwarmError::InvalidRange { name, min, max } => {
                write!(f, "range `{}` is invalid: [{}, {}]", name, min, max)
            }
            SwarmError::NonPositive { name, value } => {
                write!(f, "`{}` must be positive, got {}", name, value)
            }
            SwarmError::Negative { name, value } => {
                write!(f, "`{}` must not be negative, got {}", name, value)
            }
            SwarmError::OutOfUnitInterval { name, value } => {
                write!(f, "`{}` must be in [0, 1], got {}", name, value)
            }
            SwarmError::InvalidLength { min } => {
                write!(f, "creature length must be at least 1, range starts at {}", min)
            }
        }
    }
}
