//! Typed configuration entries for mods.
//!
//! A [`ConfigEntry<T>`] holds one named setting with:
//! - a default provider, invoked fresh every time the default is requested
//! - a local and a remote slot, both seeded from the default
//! - side-aware routing: entries on [`ConfigSide::Both`] read and write the
//!   remote slot while the process is a multiplayer client
//! - [`ValueHooks`] that intercept every slot read and write
//! - display text registered lazily through a [`LocalizationRegistry`]
//!
//! [`ErasedConfigEntry`] exposes the same entry to code that does not know `T`.
//!
//! [`ConfigSide::Both`]: modcfg_types::ConfigSide::Both
//! [`LocalizationRegistry`]: modcfg_localization::LocalizationRegistry

mod display;
mod entry;
mod erased;
mod error;
mod hooks;

pub use display::default_display_name;
pub use entry::{ConfigEntry, DESCRIPTION_SUFFIX, DISPLAY_NAME_SUFFIX};
pub use erased::ErasedConfigEntry;
pub use error::{BoxError, ConfigError, ConfigResult};
pub use hooks::{Clamp, Identity, ValueHooks};
