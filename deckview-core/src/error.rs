//! Error types for deck and config loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or validating a deck.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("read deck file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse deck TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize deck TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("deck has no slides")]
    Empty,

    #[error("slide {index}: {reason}")]
    InvalidSlide { index: usize, reason: String },
}

/// Errors from loading viewer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
