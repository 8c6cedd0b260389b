//! Channel polling
//!
//! Drains background channels without blocking the frame loop.

use candy_core::burst::BurstEvent;
use tokio::sync::mpsc::{self, error::TryRecvError};

/// Result of a polling operation that may trigger UI updates
#[derive(Debug, Default)]
pub struct PollResult {
    /// Whether any data was received that requires a redraw
    pub needs_redraw: bool,
}

/// Drain burst lifecycle events
pub fn poll_burst_events(rx: &mut mpsc::UnboundedReceiver<BurstEvent>) -> PollResult {
    let mut result = PollResult::default();

    loop {
        match rx.try_recv() {
            Ok(BurstEvent::Triggered {
                generation,
                particles,
            }) => {
                tracing::trace!(generation, particles, "Confetti burst visible");
                result.needs_redraw = true;
            }
            Ok(BurstEvent::Cleared { generation }) => {
                tracing::trace!(generation, "Confetti burst cleared");
                result.needs_redraw = true;
            }
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                tracing::debug!("Burst event channel disconnected");
                break;
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drains_all_events() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(BurstEvent::Triggered {
            generation: 1,
            particles: 26,
        })
        .unwrap();
        tx.send(BurstEvent::Cleared { generation: 1 }).unwrap();

        assert!(poll_burst_events(&mut rx).needs_redraw);
        assert!(!poll_burst_events(&mut rx).needs_redraw);
    }

    #[test]
    fn test_disconnected_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel::<BurstEvent>();
        drop(tx);
        assert!(!poll_burst_events(&mut rx).needs_redraw);
    }
}
