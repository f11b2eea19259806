//! Error types for configuration entries.

use modcfg_localization::LocalizationError;
use thiserror::Error;

/// Boxed error returned by fallible default providers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// An untyped write carried a value of the wrong type.
    #[error("type mismatch for config entry {entry}: expected {expected}")]
    TypeMismatch {
        entry: String,
        expected: &'static str,
    },

    /// The default value provider failed.
    #[error("default value provider for {entry} failed: {source}")]
    DefaultProvider {
        entry: String,
        #[source]
        source: BoxError,
    },

    #[error("localization error: {0}")]
    Localization(#[from] LocalizationError),
}

/// Result type for configuration entry operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
