//! Terminal front-end for the landing page

pub mod animation;
pub mod app;
pub mod components;
pub mod handlers;
pub mod polling;
pub mod sections;
pub mod themes;
pub mod utils;

use anyhow::{Context, Result};
use candy_core::LandingConfig;

pub use app::App;

/// Set up the terminal, run the page until the user quits, restore the terminal
pub async fn run(config: &LandingConfig) -> Result<()> {
    let terminal = ratatui::try_init().context("Failed to initialize terminal")?;

    let mut app = App::new(config);
    let result = app.run(terminal).await;

    if let Err(e) = ratatui::try_restore() {
        tracing::warn!(error = %e, "Failed to restore terminal");
    }
    result
}
