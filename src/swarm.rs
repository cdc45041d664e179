//! A population of creatures sharing one configuration and RNG.

use crate::config::SwarmConfig;
use crate::creature::Creature;
use crate::error::SwarmError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::stepper::{advance, Pointer};
use crate::vec::Vec2;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// World half-extents for a viewport aspect ratio (width / height).
///
/// The shorter axis always spans [-1, 1].
pub fn bounds_for_aspect<F: Float>(aspect: F) -> Vec2<F> {
    if aspect > F::one() {
        Vec2::new(aspect, F::one())
    } else {
        Vec2::new(F::one(), F::one() / aspect)
    }
}

/// Every creature of a run, advanced together frame by frame.
pub struct Swarm<F: Float> {
    config: SwarmConfig<F>,
    creatures: Vec<Creature<F>>,
    bounds: Vec2<F>,
    rng: SmallRng,
    paused: bool,
}

impl<F: Float> Swarm<F> {
    /// Validate `config` and spawn `config.population` creatures at uniform
    /// positions inside `bounds`. The same seed reproduces the same run.
    pub fn new(config: SwarmConfig<F>, bounds: Vec2<F>, seed: u64) -> Result<Self, SwarmError> {
        config.validate()?;
        let mut rng = SmallRng::seed_from_u64(seed);

        let creatures = (0..config.population)
            .map(|_| {
                let x = bounds.x * F::from_f64(rng.gen::<f64>() * 2.0 - 1.0);
                let y = bounds.y * F::from_f64(rng.gen::<f64>() * 2.0 - 1.0);
                Creature::spawn(Vec2::new(x, y), &config.ranges, &mut rng)
            })
            .collect::<Vec<_>>();

        debug!(population = creatures.len(), seed, "swarm spawned");

        Ok(Swarm { config, creatures, bounds, rng, paused: false })
    }

    /// Advance every creature by `dt_frame` seconds. Paused swarms do no
    /// work. Returns the total number of substeps taken.
    pub fn step<O: StepObserver>(&mut self, dt_frame: F, pointer: Pointer<F>, observer: &mut O) -> usize {
        let dt = if self.paused { F::zero() } else { dt_frame };
        let mut substeps = 0;
        for creature in self.creatures.iter_mut() {
            substeps += advance(
                creature,
                dt,
                || pointer,
                self.bounds,
                &self.config.dynamics,
                &mut self.rng,
                observer,
            );
        }
        substeps
    }

    /// Called on viewport resize.
    pub fn set_bounds(&mut self, bounds: Vec2<F>) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Vec2<F> {
        self.bounds
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn creatures(&self) -> &[Creature<F>] {
        &self.creatures
    }

    /// Longest chain in the swarm, for renderers that size slots per creature.
    pub fn max_len(&self) -> usize {
        self.creatures.iter().map(Creature::len).max().unwrap_or(0)
    }

    pub fn config(&self) -> &SwarmConfig<F> {
        &self.config
    }
}
