//! Clear timer for confetti batches
//!
//! Wraps a spawned sleep plus a `CancellationToken`. Dropping the timer
//! cancels it, so replacing or discarding the handle can never leave a live
//! timer behind.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A pending delayed action for one batch generation
pub(crate) struct ClearTimer {
    token: CancellationToken,
    handle: JoinHandle<()>,
    generation: u64,
}

impl ClearTimer {
    /// Run `on_fire` after `delay` unless cancelled first
    ///
    /// Must be called from within a tokio runtime.
    pub(crate) fn arm<F>(generation: u64, delay: Duration, on_fire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let token = CancellationToken::new();
        let handle = tokio::spawn(fire_after(token.child_token(), generation, delay, on_fire));

        Self {
            token,
            handle,
            generation,
        }
    }

    /// Cancel the timer; a no-op if it already fired
    pub(crate) fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the timer is still waiting to fire
    pub(crate) fn is_armed(&self) -> bool {
        !self.token.is_cancelled() && !self.handle.is_finished()
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for ClearTimer {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn fire_after<F>(token: CancellationToken, generation: u64, delay: Duration, on_fire: F)
where
    F: FnOnce() + Send + 'static,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            tracing::trace!(generation, "Clear timer cancelled");
        }
        _ = tokio::time::sleep(delay) => {
            on_fire();
        }
    }
}
