//! Event handlers for the TUI
//!
//! Keyboard dispatch, frame ticks and rendering, split out of app.rs.

pub mod event_loop;
pub mod keyboard;
pub mod rendering;
