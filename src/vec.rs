//! Planar vector type for creature positions, velocities and forces.

use crate::float::Float;
use core::ops::{Add, AddAssign, Neg, Sub};
use serde::{Deserialize, Serialize};

/// 2D vector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Unit vector pointing at `angle` radians from the +x axis.
    pub fn from_angle(angle: F) -> Self {
        Vec2 { x: angle.cos(), y: angle.sin() }
    }

    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Unit vector in the same direction, or zero for a zero-length vector.
    pub fn normalize_or_zero(self) -> Self {
        let len = self.length();
        if len > F::zero() {
            self.scale(F::one() / len)
        } else {
            Self::zero()
        }
    }

    /// Rescale uniformly so the length does not exceed `max`. Direction is kept.
    pub fn clamp_length(self, max: F) -> Self {
        let len = self.length();
        if len != F::zero() && max < len {
            self.scale(max / len)
        } else {
            self
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f64, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_zero_vector() {
        let v = Vec2::<f64>::zero();
        assert_eq!(v.normalize_or_zero(), Vec2::zero());
    }

    #[test]
    fn normalize_tiny_vector_is_unit() {
        let n = Vec2::new(1e-12f64, 0.0).normalize_or_zero();
        assert!((n.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn clamp_length_keeps_direction() {
        let v = Vec2::new(6.0f64, 8.0).clamp_length(5.0);
        assert!((v.length() - 5.0).abs() < 1e-12);
        assert!((v.x - 3.0).abs() < 1e-12);
        assert!((v.y - 4.0).abs() < 1e-12);
    }

    #[test]
    fn clamp_length_leaves_short_vectors() {
        let v = Vec2::new(0.3f64, 0.4);
        assert_eq!(v.clamp_length(1.0), v);
        assert_eq!(Vec2::<f64>::zero().clamp_length(0.0), Vec2::zero());
    }

    #[test]
    fn from_angle_is_unit() {
        for i in 0..16 {
            let a = i as f64 * 0.4;
            assert!((Vec2::from_angle(a).length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f64, 0.0);
        let b = Vec2::new(3.0f64, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
    }
}
