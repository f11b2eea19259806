//! Get-or-register localization registry.

use crate::options::{DEFAULT_NAMESPACE, DEFAULT_SEGMENT};
use crate::{LocalizationError, LocalizationOptions, LocalizationResult, LocalizedText};
use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;
use tracing::{debug, info, trace, warn};

/// Registry capability consumed by configuration entries.
pub trait LocalizationRegistry: Send + Sync {
    /// Returns the text registered under `key`, registering it with
    /// `default_text()` first if absent.
    ///
    /// The first registration wins: once a key exists the factory is never
    /// invoked again for it and the same handle is returned.
    fn get_or_register(
        &self,
        key: &str,
        default_text: &dyn Fn() -> String,
    ) -> LocalizationResult<LocalizedText>;

    /// Root namespace for configuration keys.
    fn namespace(&self) -> &str {
        DEFAULT_NAMESPACE
    }

    /// Segment between the mod name and the category.
    fn segment(&self) -> &str {
        DEFAULT_SEGMENT
    }
}

/// In-memory localization registry.
#[derive(Debug, Default)]
pub struct Language {
    options: LocalizationOptions,
    texts: RwLock<HashMap<String, LocalizedText>>,
}

impl Language {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: LocalizationOptions) -> Self {
        Self {
            options,
            texts: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn options(&self) -> &LocalizationOptions {
        &self.options
    }

    /// Looks up a key without registering it.
    pub fn get(&self, key: &str) -> LocalizationResult<Option<LocalizedText>> {
        let texts = self.texts.read().map_err(|_| LocalizationError::LockPoisoned)?;
        Ok(texts.get(key).cloned())
    }

    pub fn contains(&self, key: &str) -> LocalizationResult<bool> {
        Ok(self.get(key)?.is_some())
    }

    pub fn len(&self) -> LocalizationResult<usize> {
        let texts = self.texts.read().map_err(|_| LocalizationError::LockPoisoned)?;
        Ok(texts.len())
    }

    pub fn is_empty(&self) -> LocalizationResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Applies translations from a TOML document.
    ///
    /// Nested tables are flattened into dotted keys. Existing texts are
    /// updated in place; unknown keys are registered so that a later
    /// `get_or_register` returns the translation instead of its default.
    /// Returns the number of keys applied.
    pub fn load_translations_str(&self, contents: &str) -> LocalizationResult<usize> {
        let table: toml::Table = toml::from_str(contents)?;
        let mut entries = Vec::new();
        flatten_table(String::new(), &table, &mut entries)?;
        for (key, _) in &entries {
            validate_key(key)?;
        }

        let mut texts = self.texts.write().map_err(|_| LocalizationError::LockPoisoned)?;
        let applied = entries.len();
        for (key, value) in entries {
            match texts.get(&key) {
                Some(existing) => {
                    warn!(key = %key, "Translation replaces registered text");
                    existing.set_value(value);
                }
                None => {
                    let text = LocalizedText::new(key.clone(), value);
                    texts.insert(key, text);
                }
            }
        }
        Ok(applied)
    }

    /// Applies translations from a TOML file. See [`Self::load_translations_str`].
    pub fn load_translations(&self, path: impl AsRef<Path>) -> LocalizationResult<usize> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| LocalizationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let applied = self.load_translations_str(&contents)?;
        info!(path = %path.display(), keys = applied, "Loaded translations");
        Ok(applied)
    }
}

impl LocalizationRegistry for Language {
    fn get_or_register(
        &self,
        key: &str,
        default_text: &dyn Fn() -> String,
    ) -> LocalizationResult<LocalizedText> {
        validate_key(key)?;

        if let Some(text) = self.get(key)? {
            trace!(key = %key, "Localization key already registered");
            return Ok(text);
        }

        // The factory runs without any lock held so it may read the registry.
        let candidate = LocalizedText::new(key, default_text());

        let mut texts = self.texts.write().map_err(|_| LocalizationError::LockPoisoned)?;
        // Another writer may have registered the key while the factory ran.
        let text = texts
            .entry(key.to_string())
            .or_insert_with(|| {
                debug!(key = %key, "Registering localization key");
                candidate
            })
            .clone();
        Ok(text)
    }

    fn namespace(&self) -> &str {
        &self.options.namespace
    }

    fn segment(&self) -> &str {
        &self.options.segment
    }
}

fn validate_key(key: &str) -> LocalizationResult<()> {
    let valid = !key.is_empty()
        && key
            .split('.')
            .all(|segment| !segment.is_empty() && !segment.chars().any(char::is_whitespace));
    if valid {
        Ok(())
    } else {
        Err(LocalizationError::InvalidKey(key.to_string()))
    }
}

fn flatten_table(
    prefix: String,
    table: &toml::Table,
    out: &mut Vec<(String, String)>,
) -> LocalizationResult<()> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            toml::Value::String(text) => out.push((key, text.clone())),
            toml::Value::Table(nested) => flatten_table(key, nested, out)?,
            _ => return Err(LocalizationError::InvalidTranslation { key }),
        }
    }
    Ok(())
}
