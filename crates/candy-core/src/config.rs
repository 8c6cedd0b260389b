//! Landing page configuration
//!
//! Read from `config.toml` in the user config directory (or an explicit
//! path). Missing keys fall back to defaults; command-line flags are applied
//! on top by the binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::carousel::DEFAULT_INTERVAL;
use crate::error::{CandyError, Result};

const DEFAULT_FPS: u32 = 30;
const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Time each testimonial stays on screen
    pub carousel_interval_ms: u64,
    /// Redraw rate while something is animating
    pub fps: u32,
    /// Fixed confetti seed (random when unset)
    pub seed: Option<u64>,
    /// Log file location (state dir when unset)
    pub log_file: Option<PathBuf>,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            carousel_interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
            fps: DEFAULT_FPS,
            seed: None,
            log_file: None,
        }
    }
}

impl LandingConfig {
    /// `<config dir>/candy-heaven/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("candy-heaven").join("config.toml"))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load from `explicit` (which must exist), else the default path if
    /// present, else defaults
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.carousel_interval_ms == 0 {
            return Err(CandyError::Config(
                "carousel_interval_ms must be greater than zero".into(),
            ));
        }
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(CandyError::Config(format!(
                "fps must be between 1 and {MAX_FPS}, got {}",
                self.fps
            )));
        }
        Ok(())
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = LandingConfig::default();
        assert_eq!(config.carousel_interval(), Duration::from_millis(4800));
        assert_eq!(config.fps, 30);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = LandingConfig::from_toml_str("seed = 42\n").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.carousel_interval_ms, 4800);
    }

    #[test]
    fn test_rejects_zero_interval() {
        let err = LandingConfig::from_toml_str("carousel_interval_ms = 0\n").unwrap_err();
        assert!(matches!(err, CandyError::Config(_)));
    }

    #[test]
    fn test_rejects_bad_fps() {
        assert!(LandingConfig::from_toml_str("fps = 0\n").is_err());
        assert!(LandingConfig::from_toml_str("fps = 1000\n").is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = LandingConfig::from_toml_str("fps = \"fast\"\n").unwrap_err();
        assert!(matches!(err, CandyError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "carousel_interval_ms = 2000").unwrap();
        writeln!(file, "fps = 60").unwrap();
        writeln!(file, "log_file = \"/tmp/candy.log\"").unwrap();

        let config = LandingConfig::load_or_default(Some(file.path())).unwrap();
        assert_eq!(config.carousel_interval(), Duration::from_secs(2));
        assert_eq!(config.frame_interval(), Duration::from_secs(1) / 60);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/candy.log")));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = LandingConfig::load_or_default(Some(&missing)).unwrap_err();
        assert!(matches!(err, CandyError::Io(_)));
    }
}
