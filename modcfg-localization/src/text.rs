//! Shared handle to a registered, translatable string.

use std::fmt;
use std::sync::{Arc, RwLock};

/// A keyed, translatable string.
///
/// Handles are shared: every caller that obtains the text for a key gets a
/// clone of the same handle, and a translation loaded later is visible
/// through all of them.
#[derive(Clone)]
pub struct LocalizedText(Arc<Inner>);

struct Inner {
    key: String,
    value: RwLock<String>,
}

impl LocalizedText {
    pub(crate) fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self(Arc::new(Inner {
            key: key.into(),
            value: RwLock::new(value.into()),
        }))
    }

    /// Returns the localization key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.0.key
    }

    /// Returns the current text.
    #[must_use]
    pub fn value(&self) -> String {
        // A plain string cannot be left half-written, so a poisoned lock is still readable.
        self.0
            .value
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub(crate) fn set_value(&self, value: String) {
        *self
            .0
            .value
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = value;
    }

    /// Returns true if both handles refer to the same registered text.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizedText")
            .field("key", &self.key())
            .field("value", &self.value())
            .finish()
    }
}

impl fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}
