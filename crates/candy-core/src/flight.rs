//! Tasting flight
//!
//! Three candy jars; at most one is spilling at a time.

use crate::catalog::{Jar, JARS};
use crate::error::{CandyError, Result};

#[derive(Debug, Default, Clone)]
pub struct TastingFlight {
    /// Jar under the cursor
    cursor: usize,
    /// Jar currently spilling
    active: Option<usize>,
}

impl TastingFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jars(&self) -> &'static [Jar] {
        &JARS
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_jar(&self) -> &'static Jar {
        &JARS[self.cursor]
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(JARS.len() - 1);
    }

    /// Start spilling a jar; any other active jar settles
    pub fn activate(&mut self, id: &str) -> Result<()> {
        let index = JARS
            .iter()
            .position(|j| j.id == id)
            .ok_or_else(|| CandyError::UnknownJar(id.to_string()))?;
        self.active = Some(index);
        tracing::debug!(jar = id, "Jar spilling");
        Ok(())
    }

    pub fn release(&mut self) {
        self.active = None;
    }

    /// Toggle spilling for the jar under the cursor
    pub fn toggle(&mut self) {
        if self.active == Some(self.cursor) {
            self.release();
        } else {
            self.active = Some(self.cursor);
        }
    }

    pub fn active(&self) -> Option<&'static Jar> {
        self.active.map(|i| &JARS[i])
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().is_some_and(|j| j.id == id)
    }
}
