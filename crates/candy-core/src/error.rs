//! Error types for candy-core

use thiserror::Error;

/// Errors raised by page state and configuration
#[derive(Debug, Error)]
pub enum CandyError {
    #[error("index {index} is out of range (length {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("unknown quest option: {0}")]
    UnknownOption(String),

    #[error("unknown jar: {0}")]
    UnknownJar(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CandyError>;
