//! Core type definitions for modcfg.
//!
//! This crate defines the small vocabulary shared by the
//! localization and entry crates:
//! - [`ConfigSide`] — which slot a setting reads from
//! - [`NetMode`] / [`NetRole`] — the process's network role
//! - [`ModHandle`] — identity of the mod that owns an entry

mod module;
mod net;
mod side;

pub use module::ModHandle;
pub use net::{NetMode, NetModeCell, NetRole};
pub use side::ConfigSide;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid net mode: {0}")]
    InvalidNetMode(u8),

    #[error("invalid config side: {0}")]
    InvalidSide(String),
}
