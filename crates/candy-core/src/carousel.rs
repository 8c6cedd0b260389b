//! Testimonial carousel
//!
//! Advances one slot per interval and wraps around. Driven by elapsed time
//! from the UI tick, like the other animated page elements.

use std::time::Duration;

use crate::error::{CandyError, Result};

/// Default time each testimonial stays on screen
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(4800);

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    interval: Duration,
    /// Time accumulated towards the next rotation
    elapsed: Duration,
}

impl Carousel {
    pub fn new(len: usize, interval: Duration) -> Self {
        Self {
            len,
            index: 0,
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Feed elapsed time; returns true if the visible slot changed
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.len == 0 || self.interval.is_zero() {
            return false;
        }

        self.elapsed += dt;
        let mut steps = 0usize;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            steps += 1;
        }

        if steps == 0 {
            return false;
        }

        let before = self.index;
        self.index = (self.index + steps) % self.len;
        if self.index != before {
            tracing::trace!(index = self.index, "Carousel rotated");
        }
        self.index != before
    }

    /// Jump straight to a slot; the rotation cadence keeps running
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(CandyError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }
}
