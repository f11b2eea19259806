//! Network role of the running process.
//!
//! Entries with [`ConfigSide::Both`](crate::ConfigSide::Both) consult a
//! [`NetRole`] on every read and write. The process-wide default is
//! [`NetModeCell::global`]; tests and embedders can hand entries their own cell.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};

/// How the process participates in a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum NetMode {
    /// Offline; this process is authoritative.
    #[default]
    SinglePlayer = 0,
    /// Connected to a server as a non-authoritative participant.
    MultiplayerClient = 1,
    /// Hosting a session.
    Server = 2,
}

impl NetMode {
    #[must_use]
    pub const fn is_multiplayer_client(self) -> bool {
        matches!(self, Self::MultiplayerClient)
    }
}

impl TryFrom<u8> for NetMode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::SinglePlayer),
            1 => Ok(Self::MultiplayerClient),
            2 => Ok(Self::Server),
            other => Err(Error::InvalidNetMode(other)),
        }
    }
}

/// Answers "is this process currently a networked, non-authoritative client?"
pub trait NetRole: Send + Sync {
    fn is_multiplayer_client(&self) -> bool;
}

impl NetRole for NetMode {
    fn is_multiplayer_client(&self) -> bool {
        NetMode::is_multiplayer_client(*self)
    }
}

/// Shared, mutable net mode. Clones observe the same value.
#[derive(Debug, Clone, Default)]
pub struct NetModeCell(Arc<AtomicU8>);

static GLOBAL_NET_MODE: OnceLock<NetModeCell> = OnceLock::new();

impl NetModeCell {
    #[must_use]
    pub fn new(mode: NetMode) -> Self {
        Self(Arc::new(AtomicU8::new(mode as u8)))
    }

    /// Returns the process-wide cell, created in `SinglePlayer` mode on first use.
    pub fn global() -> &'static NetModeCell {
        GLOBAL_NET_MODE.get_or_init(NetModeCell::default)
    }

    /// Returns the current mode.
    #[must_use]
    pub fn get(&self) -> NetMode {
        // Only `set` writes the cell, so the stored byte is always a valid mode.
        NetMode::try_from(self.0.load(Ordering::Acquire)).unwrap_or_default()
    }

    pub fn set(&self, mode: NetMode) {
        self.0.store(mode as u8, Ordering::Release);
    }
}

impl NetRole for NetModeCell {
    fn is_multiplayer_client(&self) -> bool {
        self.get().is_multiplayer_client()
    }
}
