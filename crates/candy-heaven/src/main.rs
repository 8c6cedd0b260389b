//! Candy Heaven - terminal landing page

mod tui;

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use candy_core::LandingConfig;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "candy-heaven", version)]
#[command(about = "A confetti-powered candy landing page for your terminal")]
struct Cli {
    /// Configuration file (defaults to <config dir>/candy-heaven/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Fixed seed for confetti bursts
    #[arg(long)]
    seed: Option<u64>,

    /// Redraw rate while animating
    #[arg(long)]
    fps: Option<u32>,

    /// Where to write logs
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Command-line flags win over the config file
    fn apply(&self, config: &mut LandingConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
    }
}

fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("candy-heaven")
        .join("candy-heaven.log")
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(config: &LandingConfig) -> Result<PathBuf> {
    let path = config.log_file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "candy_heaven=info,candy_core=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();

    Ok(path)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = LandingConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    cli.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    let log_path = init_logging(&config)?;
    tracing::info!(
        log = %log_path.display(),
        seed = ?config.seed,
        fps = config.fps,
        "Candy Heaven starting"
    );

    let result = tui::run(&config).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Candy Heaven exited with an error");
    }
    result
}
