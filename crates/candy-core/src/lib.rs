//! Candy Heaven core library
//!
//! Page state for the Candy Heaven landing page: confetti bursts and their
//! clear timers, the testimonial carousel, the quest, the tasting flight and
//! the contact form. Rendering lives in the `candy-heaven` binary.

pub mod burst;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod flight;
pub mod quest;

pub use burst::{Batch, BurstEvent, BurstGenerator, BurstState, Particle};
pub use carousel::Carousel;
pub use config::LandingConfig;
pub use contact::{ContactError, ContactField, ContactForm, Sugargram};
pub use error::{CandyError, Result};
pub use flight::TastingFlight;
pub use quest::Quest;
