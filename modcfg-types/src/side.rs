//! Side of the network a configuration entry belongs to.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Determines whether an entry's effective value is local, remote, or
/// switches on network role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSide {
    /// Purely client-side; always reads the local slot.
    Local,
    /// Server-driven value; still stored in the local slot unless synced.
    Remote,
    /// Reads the remote slot while connected as a multiplayer client,
    /// the local slot otherwise.
    Both,
}

impl ConfigSide {
    /// Returns the lowercase name of the side.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for ConfigSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigSide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            "both" => Ok(Self::Both),
            _ => Err(Error::InvalidSide(s.to_string())),
        }
    }
}
