//! Circular body elements.

use crate::float::Float;
use crate::vec::Vec2;

/// One circular body element of a creature.
///
/// `size` is the radius and never changes after creation. Position and
/// velocity are only written by the owning creature's update.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<F: Float> {
    size: F,
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
}

impl<F: Float> Segment<F> {
    pub fn new(size: F, position: Vec2<F>) -> Self {
        Segment { size, position, velocity: Vec2::zero() }
    }

    pub fn size(&self) -> F {
        self.size
    }
}
