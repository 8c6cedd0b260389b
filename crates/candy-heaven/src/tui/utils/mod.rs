//! TUI utilities

pub mod form;
pub mod text;
