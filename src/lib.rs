//! Swarms of worm-like creatures for games and generative visuals.
//!
//! `squirm` simulates creatures whose bodies are chains of tapered circles.
//! A creature's head is steered by forces; its tail follows through a stiff
//! kinematic spring. Rendering, input capture and colour generation are left
//! to the caller: the crate takes a frame time, a pointer snapshot and the
//! world bounds, and updates segment positions and velocities in place.
//!
//! # Features
//!
//! - **Head dynamics**: pointer attraction, random activity impulses, soft
//!   boundary avoidance, clamped and damped second-order integration
//! - **Chain solver**: stretch-proportional velocities propagated head to tail
//! - **Sub-stepping**: frame time split into bounded steps for stability
//! - **Deterministic**: all randomness flows through a seedable `rand::Rng`
//! - **Configurable**: immutable, serde-loadable configuration
//! - **Observable**: monitor steps via the `StepObserver` trait or `tracing`
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! # Example
//! ```
//! use squirm::{Pointer, Swarm, SwarmConfig, NoOpStepObserver, Vec2};
//!
//! let config: SwarmConfig<f64> = SwarmConfig::new().with_population(10);
//! let mut swarm = Swarm::new(config, Vec2::new(1.5, 1.0), 42).unwrap();
//! let pointer = Pointer::new(Vec2::new(0.2, 0.1), true);
//! swarm.step(1.0 / 60.0, pointer, &mut NoOpStepObserver);
//! for creature in swarm.creatures() {
//!     for segment in creature.segments() {
//!         let _ = (segment.size(), segment.position, segment.velocity);
//!     }
//! }
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod range;
pub mod segment;
pub mod head;
pub mod chain;
pub mod creature;
pub mod stepper;
pub mod swarm;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use range::ParameterRange;
pub use segment::Segment;
pub use head::{ActivityTimer, HeadInput};
pub use chain::{solve_chain, spring_velocity};
pub use creature::{Color, Creature, CreatureParams};
pub use stepper::{advance, Pointer, Substeps};
pub use swarm::{bounds_for_aspect, Swarm};
pub use config::{CreatureRanges, DynamicsConfig, SwarmConfig};
pub use observer::{NoOpStepObserver, StepObserver, TracingObserver};
pub use error::SwarmError;
