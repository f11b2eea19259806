//! Owning-mod identity.

use std::fmt;
use std::sync::Arc;

/// Identity of the mod that owns a configuration entry.
///
/// Only the name is observable; it forms the mod segment of localization keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModHandle(Arc<str>);

impl ModHandle {
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the mod's internal name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
