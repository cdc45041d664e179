//! Step observer trait for monitoring the simulation.

use tracing::{debug, trace};

/// Trait for observing simulation progress.
///
/// Implement this to log, profile or visualise what the stepper does. All
/// methods have default no-op implementations.
pub trait StepObserver {
    /// Called after a creature has been advanced by one substep.
    fn on_substep(&mut self, _dt: f64) {}

    /// Called when a creature's activity timer fires a random impulse.
    fn on_activity_impulse(&mut self, _magnitude: f64) {}

    /// Called once a creature has consumed a whole frame's elapsed time.
    fn on_frame_complete(&mut self, _substeps: usize) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards simulation events to `tracing`.
///
/// Substeps and impulses are emitted at `trace` level, frame completion at
/// `debug` level.
#[derive(Debug, Default)]
pub struct TracingObserver {
    impulses: u64,
}

impl TracingObserver {
    pub fn new() -> Self {
        TracingObserver::default()
    }

    /// Impulses seen since construction.
    pub fn impulses(&self) -> u64 {
        self.impulses
    }
}

impl StepObserver for TracingObserver {
    fn on_substep(&mut self, dt: f64) {
        trace!(dt, "substep");
    }

    fn on_activity_impulse(&mut self, magnitude: f64) {
        self.impulses += 1;
        trace!(magnitude, total = self.impulses, "activity impulse");
    }

    fn on_frame_complete(&mut self, substeps: usize) {
        debug!(substeps, "frame complete");
    }
}
