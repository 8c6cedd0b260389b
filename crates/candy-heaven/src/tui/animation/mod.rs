//! Animation for the landing page
//!
//! Confetti from the hero button, plus small looping motions shared by the
//! sections (bobbing, pulsing, pop-ins).

pub mod confetti;
pub mod motion;

pub use confetti::render_confetti;
