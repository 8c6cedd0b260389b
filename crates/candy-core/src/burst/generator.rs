//! Burst generator
//!
//! Turns a trigger into a visible batch of confetti and keeps at most one
//! clear timer armed. Cancelling the previous timer and arming the next one
//! both happen inside `trigger(&mut self)`, and every timer also carries the
//! generation it was armed for, so a superseded timer never clears a newer
//! batch.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::time::Instant;

use super::particle::Particle;
use super::random::{RandomSource, SeededRandom};
use super::timer::ClearTimer;
use super::{BATCH_LIFETIME, BATCH_SIZE};

/// Lifecycle notifications for the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstEvent {
    /// A new batch became visible
    Triggered { generation: u64, particles: usize },
    /// The batch of `generation` was cleared by its timer
    Cleared { generation: u64 },
}

/// Generator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstState {
    /// Empty batch, no timer
    Idle,
    /// Non-empty batch with one armed timer
    Bursting,
}

/// An immutable batch of particles sharing one lifetime
#[derive(Debug, Clone)]
pub struct Batch {
    generation: u64,
    started_at: Option<Instant>,
    particles: Arc<[Particle]>,
}

impl Batch {
    pub fn empty() -> Self {
        Self {
            generation: 0,
            started_at: None,
            particles: Arc::from(Vec::new()),
        }
    }

    fn new(generation: u64, particles: Vec<Particle>) -> Self {
        Self {
            generation,
            started_at: Some(Instant::now()),
            particles: Arc::from(particles),
        }
    }

    /// Trigger sequence number; 0 for the empty batch
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Time since the batch was triggered (zero for the empty batch)
    pub fn elapsed(&self) -> Duration {
        self.started_at
            .map(|start| start.elapsed())
            .unwrap_or_default()
    }
}

impl Default for Batch {
    fn default() -> Self {
        Self::empty()
    }
}

/// Draw one full batch worth of particles
pub fn spawn_particles(rng: &mut dyn RandomSource) -> Vec<Particle> {
    (0..BATCH_SIZE).map(|_| Particle::spawn(&mut *rng)).collect()
}

/// State shared with the clear timer
struct Shared {
    batch: Batch,
    events: Option<mpsc::UnboundedSender<BurstEvent>>,
}

impl Shared {
    /// Clear the batch if it still belongs to `generation`
    fn clear_if_current(&mut self, generation: u64) -> bool {
        if self.batch.generation != generation || self.batch.is_empty() {
            tracing::debug!(
                generation,
                current = self.batch.generation,
                "Ignoring stale clear"
            );
            return false;
        }

        self.batch = Batch::empty();
        self.emit(BurstEvent::Cleared { generation });
        tracing::debug!(generation, "Burst cleared");
        true
    }

    fn emit(&mut self, event: BurstEvent) {
        if let Some(tx) = &self.events {
            if tx.send(event).is_err() {
                // Receiver went away; stop sending
                self.events = None;
            }
        }
    }
}

/// Produces confetti batches and clears them after [`BATCH_LIFETIME`]
pub struct BurstGenerator {
    shared: Arc<Mutex<Shared>>,
    rng: Box<dyn RandomSource>,
    pending: Option<ClearTimer>,
    last_generation: u64,
}

impl BurstGenerator {
    pub fn new() -> Self {
        Self::with_random(SeededRandom::from_entropy())
    }

    /// Generator drawing from the given random source
    pub fn with_random(rng: impl RandomSource + 'static) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                batch: Batch::empty(),
                events: None,
            })),
            rng: Box::new(rng),
            pending: None,
            last_generation: 0,
        }
    }

    /// Receive lifecycle events; replaces any previous subscriber
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<BurstEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.shared.lock().events = Some(tx);
        rx
    }

    /// Show a fresh batch and (re)arm the clear timer
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
            tracing::debug!(
                generation = previous.generation(),
                "Superseding pending burst"
            );
        }

        self.last_generation += 1;
        let generation = self.last_generation;
        let batch = Batch::new(generation, spawn_particles(self.rng.as_mut()));

        {
            let mut shared = self.shared.lock();
            shared.batch = batch;
            shared.emit(BurstEvent::Triggered {
                generation,
                particles: BATCH_SIZE,
            });
        }

        let target: Weak<Mutex<Shared>> = Arc::downgrade(&self.shared);
        self.pending = Some(ClearTimer::arm(generation, BATCH_LIFETIME, move || {
            if let Some(shared) = target.upgrade() {
                shared.lock().clear_if_current(generation);
            }
        }));

        tracing::debug!(generation, particles = BATCH_SIZE, "Burst triggered");
    }

    /// Currently visible batch
    pub fn snapshot(&self) -> Batch {
        self.shared.lock().batch.clone()
    }

    pub fn state(&self) -> BurstState {
        if self.shared.lock().batch.is_empty() {
            BurstState::Idle
        } else {
            BurstState::Bursting
        }
    }

    /// Whether a clear timer is armed
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(ClearTimer::is_armed)
    }

    /// Release the pending timer; the visible batch is left as is
    pub fn shutdown(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.cancel();
            tracing::debug!(generation = timer.generation(), "Burst timer released");
        }
    }
}

impl Default for BurstGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BurstGenerator {
    fn drop(&mut self) {
        self.shutdown();
    }
}
