//! Confetti bursts
//!
//! A trigger produces a batch of short-lived particles that is cleared again
//! after a fixed lifetime, or replaced right away by the next trigger.

pub mod generator;
pub mod particle;
pub mod random;
mod timer;

pub use generator::{Batch, BurstEvent, BurstGenerator, BurstState};
pub use particle::{Particle, ParticleFrame, CONFETTI_PALETTE};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};

use std::time::Duration;

/// Particles per batch
pub const BATCH_SIZE: usize = 26;

/// How long a batch stays visible before it is cleared
pub const BATCH_LIFETIME: Duration = Duration::from_millis(1200);

/// Flight time of a single particle once its start delay has passed
pub const FLIGHT_DURATION: Duration = Duration::from_millis(1100);

/// Horizontal spread: offsets land in `[-SPREAD_X, SPREAD_X]`
pub const SPREAD_X: f64 = 120.0;

/// Minimum upward travel
pub const RISE_MIN: f64 = 60.0;

/// Extra upward travel on top of `RISE_MIN`
pub const RISE_RANGE: f64 = 220.0;

/// Upper bound (exclusive) for particle rotation, in degrees
pub const MAX_ROTATION: f64 = 540.0;

/// Upper bound (exclusive) for particle start delay, in seconds
pub const MAX_DELAY: f64 = 0.35;
