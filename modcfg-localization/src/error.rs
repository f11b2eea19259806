//! Error types for the localization registry.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocalizationError {
    /// Key is empty or has an empty or whitespace-bearing segment.
    #[error("invalid localization key: {0:?}")]
    InvalidKey(String),

    /// A writer panicked while holding the registry lock.
    #[error("localization registry lock poisoned")]
    LockPoisoned,

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A translation file leaf that is not a string.
    #[error("translation for {key} is not a string")]
    InvalidTranslation { key: String },
}

/// Result type for localization operations.
pub type LocalizationResult<T> = Result<T, LocalizationError>;
