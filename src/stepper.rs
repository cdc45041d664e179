//! Frame stepping: splits elapsed time into bounded substeps.
//!
//! The tail spring is explicit, so large steps make stretch-proportional
//! velocities overshoot. [`advance`] never integrates more than
//! `sim_max_dt` at once.

use crate::config::DynamicsConfig;
use crate::creature::Creature;
use crate::float::Float;
use crate::head::HeadInput;
use crate::observer::StepObserver;
use crate::vec::Vec2;
use rand::Rng;

/// Pointer snapshot, read once per substep.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pointer<F: Float> {
    pub position: Vec2<F>,
    /// Whether the pointer is pressed (attracting creatures).
    pub active: bool,
}

impl<F: Float> Pointer<F> {
    pub fn new(position: Vec2<F>, active: bool) -> Self {
        Pointer { position, active }
    }

    pub fn idle() -> Self {
        Pointer { position: Vec2::zero(), active: false }
    }
}

/// Iterator over the substeps of one frame.
///
/// Yields `floor(dt_frame / max_dt)` steps of `max_dt`, then one step with
/// the remainder if any is left. The count is fixed up front, so the
/// iterator ends even when `max_dt` is below the precision of `dt_frame`.
/// Zero, negative or non-finite frame time yields nothing.
#[derive(Copy, Clone, Debug)]
pub struct Substeps<F: Float> {
    full: usize,
    step: F,
    rest: F,
}

impl<F: Float> Substeps<F> {
    pub fn new(dt_frame: F, max_dt: F) -> Self {
        if !(dt_frame > F::zero()) || !dt_frame.is_finite() {
            return Substeps { full: 0, step: max_dt, rest: F::zero() };
        }
        if !(max_dt > F::zero()) || max_dt >= dt_frame {
            return Substeps { full: 0, step: max_dt, rest: dt_frame };
        }
        let full = (dt_frame / max_dt).floor().to_f64() as usize;
        let rest = (dt_frame - F::from_f64(full as f64) * max_dt).min(max_dt);
        Substeps { full, step: max_dt, rest }
    }
}

impl<F: Float> Iterator for Substeps<F> {
    type Item = F;

    fn next(&mut self) -> Option<F> {
        if self.full > 0 {
            self.full -= 1;
            return Some(self.step);
        }
        if self.rest > F::zero() {
            let rest = self.rest;
            self.rest = F::zero();
            return Some(rest);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.full + usize::from(self.rest > F::zero());
        (n, Some(n))
    }
}

impl<F: Float> ExactSizeIterator for Substeps<F> {}

/// Advance one creature by a frame's elapsed time.
///
/// `pointer` is sampled before every substep, so a collaborator that updates
/// it between calls is seen at the next substep. Returns the number of
/// substeps taken.
pub fn advance<F, R, O, P>(
    creature: &mut Creature<F>,
    dt_frame: F,
    mut pointer: P,
    bounds: Vec2<F>,
    dynamics: &DynamicsConfig<F>,
    rng: &mut R,
    observer: &mut O,
) -> usize
where
    F: Float,
    R: Rng + ?Sized,
    O: StepObserver,
    P: FnMut() -> Pointer<F>,
{
    let mut count = 0;
    for dt in Substeps::new(dt_frame, dynamics.sim_max_dt) {
        let p = pointer();
        let input = HeadInput {
            dt,
            pointer_position: p.position,
            pointer_active: p.active,
            bounds,
        };
        creature.update(&input, dynamics, rng, observer);
        observer.on_substep(dt.to_f64());
        count += 1;
    }
    if count > 0 {
        observer.on_frame_complete(count);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn zero_frame_has_no_steps() {
        assert_eq!(Substeps::new(0.0f64, 0.005).count(), 0);
        assert_eq!(Substeps::new(-1.0f64, 0.005).count(), 0);
    }

    #[test]
    fn steps_never_exceed_max() {
        let steps: Vec<f64> = Substeps::new(0.0173, 0.005).collect();
        assert_eq!(steps.len(), 4);
        assert!(steps.iter().all(|&s| s <= 0.005 && s > 0.0));
    }

    #[test]
    fn dyadic_steps_sum_exactly() {
        let steps: Vec<f64> = Substeps::new(0.6875, 0.125).collect();
        assert_eq!(steps, [0.125, 0.125, 0.125, 0.125, 0.125, 0.0625]);
        assert_eq!(steps.iter().sum::<f64>(), 0.6875);
    }

    #[test]
    fn size_hint_matches_count() {
        let steps = Substeps::new(0.0173f64, 0.005);
        assert_eq!(steps.len(), 4);
        assert_eq!(steps.count(), 4);
    }

    #[test]
    fn frame_equal_to_max_is_one_step() {
        let steps: Vec<f64> = Substeps::new(0.005, 0.005).collect();
        assert_eq!(steps, [0.005]);
    }

    #[test]
    fn frame_shorter_than_max_is_one_step() {
        let steps: Vec<f64> = Substeps::new(0.002, 0.005).collect();
        assert_eq!(steps, [0.002]);
    }
}
