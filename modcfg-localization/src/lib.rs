//! Localization registry for modcfg.
//!
//! - [`LocalizedText`] — a shared handle to one keyed, translatable string
//! - [`LocalizationRegistry`] — the get-or-register capability entries depend on
//! - [`Language`] — an in-memory registry that can also load translation files
//! - [`LocalizationOptions`] — key layout, loaded from TOML

mod error;
mod options;
mod registry;
mod text;

pub use error::{LocalizationError, LocalizationResult};
pub use options::{DEFAULT_NAMESPACE, DEFAULT_SEGMENT, LocalizationOptions};
pub use registry::{Language, LocalizationRegistry};
pub use text::LocalizedText;
