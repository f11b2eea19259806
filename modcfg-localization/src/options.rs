//! Localization key layout, read from an optional `localization.toml`.

use crate::{LocalizationError, LocalizationResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Root namespace of every mod localization key.
pub const DEFAULT_NAMESPACE: &str = "Mods";

/// Segment separating the mod name from configuration keys.
pub const DEFAULT_SEGMENT: &str = "Configuration";

/// Controls how configuration localization keys are laid out:
/// `<namespace>.<mod>.<segment>.<category>.<name>.<suffix>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizationOptions {
    pub namespace: String,
    pub segment: String,
}

impl Default for LocalizationOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            segment: DEFAULT_SEGMENT.to_string(),
        }
    }
}

impl LocalizationOptions {
    /// Parses options from TOML. Missing fields take their defaults.
    pub fn from_toml_str(contents: &str) -> LocalizationResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads options from `path`, or the defaults if the file does not exist.
    pub fn load_from(path: impl AsRef<Path>) -> LocalizationResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "No localization options file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| LocalizationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), namespace = %options.namespace, "Loaded localization options");
        Ok(options)
    }
}
