//! Viewer configuration — optional TOML file, every key defaulted.
//!
//! ```toml
//! activate_delay_ms = 50
//! settle_delay_ms = 600
//! reduced_motion = false
//! swipe_threshold = 6
//! tick_ms = 50
//! # auto_advance_secs = 15
//!
//! [logging]
//! level = "info"
//! # file = "/tmp/deckview.log"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::navigator::TransitionTiming;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `deckview=debug`.
    pub level: String,
    /// Log file path; a per-user data directory is used when unset.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub activate_delay_ms: u64,
    pub settle_delay_ms: u64,
    /// Finish decorative animations instantly.
    pub reduced_motion: bool,
    /// Minimum horizontal drag, in terminal cells, that counts as a swipe.
    pub swipe_threshold: u32,
    /// Input poll interval of the event loop.
    pub tick_ms: u64,
    /// Advance automatically after this many idle seconds. Off when unset.
    pub auto_advance_secs: Option<u64>,
    pub logging: LoggingConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            activate_delay_ms: 50,
            settle_delay_ms: 600,
            reduced_motion: false,
            swipe_threshold: 6,
            tick_ms: 50,
            auto_advance_secs: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file. A missing file yields defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn timing(&self) -> TransitionTiming {
        TransitionTiming {
            activate_delay: Duration::from_millis(self.activate_delay_ms),
            settle_delay: Duration::from_millis(self.settle_delay_ms),
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn auto_advance(&self) -> Option<Duration> {
        self.auto_advance_secs
            .filter(|&s| s > 0)
            .map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_transition_pacing() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.timing(), TransitionTiming::default());
        assert_eq!(cfg.auto_advance(), None);
        assert_eq!(cfg.tick(), Duration::from_millis(50));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg = ViewerConfig::from_toml(
            r#"
            reduced_motion = true
            auto_advance_secs = 15

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert!(cfg.reduced_motion);
        assert_eq!(cfg.auto_advance(), Some(Duration::from_secs(15)));
        assert_eq!(cfg.settle_delay_ms, 600);
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.file, None);
    }

    #[test]
    fn zero_auto_advance_is_off() {
        let cfg = ViewerConfig::from_toml("auto_advance_secs = 0").unwrap();
        assert_eq!(cfg.auto_advance(), None);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let cfg = ViewerConfig::load(Path::new("/nonexistent/deckview/config.toml")).unwrap();
        assert_eq!(cfg, ViewerConfig::default());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tick_ms = \"fast\"").unwrap();
        assert!(matches!(ViewerConfig::load(&path), Err(ConfigError::Parse(_))));
    }
}
