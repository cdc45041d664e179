//! Tail propagation: each segment is pulled toward the one ahead of it.
//!
//! The spring is kinematic. A segment's velocity is set directly from the
//! current stretch, so tail segments carry no inertia of their own.

use crate::float::Float;
use crate::segment::Segment;
use crate::vec::Vec2;

/// Velocity of a trailing segment given its offset to the segment ahead.
///
/// `dp` points from the trailing segment to the leading one. Returns `None`
/// when the centres coincide.
pub fn spring_velocity<F: Float>(dp: Vec2<F>, lead_size: F, trail_size: F, k_spring: F) -> Option<Vec2<F>> {
    let dist = dp.length();
    if dist <= F::zero() {
        return None;
    }
    let stretch = (dist - (lead_size + trail_size)).max(F::zero());
    Some(dp.scale(k_spring * stretch / dist))
}

/// Update every segment after the head, in order.
///
/// A segment that coincides exactly with its reference is left untouched
/// for this substep, and the next segment keeps comparing against the same
/// reference.
pub fn solve_chain<F: Float>(segments: &mut [Segment<F>], dt: F, k_spring: F, v_damp: F) {
    if segments.len() < 2 {
        return;
    }
    let decay = F::one() / (F::one() + v_damp * dt);

    let mut prev = 0;
    for i in 1..segments.len() {
        let (lead, trail) = (&segments[prev], &segments[i]);
        let dp = lead.position - trail.position;
        let Some(velocity) = spring_velocity(dp, lead.size(), trail.size(), k_spring) else {
            continue;
        };

        let seg = &mut segments[i];
        seg.velocity = velocity;
        seg.position += velocity.scale(dt);
        seg.velocity = velocity.scale(decay);

        prev = i;
    }
}
