//! The typed configuration entry.

use crate::display::default_display_name;
use crate::error::{BoxError, ConfigError, ConfigResult};
use crate::hooks::{Identity, ValueHooks};
use modcfg_localization::{LocalizationRegistry, LocalizedText};
use modcfg_types::{ConfigSide, ModHandle, NetModeCell, NetRole};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Localization key suffix for an entry's display name.
pub const DISPLAY_NAME_SUFFIX: &str = "DisplayName";

/// Localization key suffix for an entry's description.
pub const DESCRIPTION_SUFFIX: &str = "Description";

type DefaultProvider<T> = Arc<dyn Fn() -> Result<T, BoxError> + Send + Sync>;

/// One named, typed configuration value.
///
/// Both slots start out as the provider's default. Reads and writes through
/// [`value`](Self::value) and [`set_value`](Self::set_value) go to the remote
/// slot only when the entry's side is [`ConfigSide::Both`] and the network
/// role reports a multiplayer client; everything else uses the local slot.
///
/// Entries have no internal synchronization. Mutation requires `&mut self`,
/// so whoever owns the entry serializes writes.
pub struct ConfigEntry<T, H = Identity> {
    name: String,
    category: String,
    side: ConfigSide,
    is_hidden: bool,
    extra_categories: Vec<String>,
    display_name: Option<LocalizedText>,
    description: Option<LocalizedText>,
    owning_mod: Option<ModHandle>,
    default_provider: DefaultProvider<T>,
    local: T,
    remote: T,
    hooks: H,
    net_role: Arc<dyn NetRole>,
}

impl<T: 'static> ConfigEntry<T> {
    /// Creates an entry whose default comes from an infallible provider.
    pub fn new<F>(
        side: ConfigSide,
        category: impl Into<String>,
        name: impl Into<String>,
        default_provider: F,
    ) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::with_hooks(side, category, name, default_provider, Identity)
    }

    /// Creates an entry whose default provider may fail. A failure while
    /// seeding the slots is returned as [`ConfigError::DefaultProvider`].
    pub fn try_new<F, E>(
        side: ConfigSide,
        category: impl Into<String>,
        name: impl Into<String>,
        default_provider: F,
    ) -> ConfigResult<Self>
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self::try_with_hooks(side, category, name, default_provider, Identity)
    }
}

impl<T: 'static, H: ValueHooks<T>> ConfigEntry<T, H> {
    /// Like [`ConfigEntry::new`], with custom value hooks.
    pub fn with_hooks<F>(
        side: ConfigSide,
        category: impl Into<String>,
        name: impl Into<String>,
        default_provider: F,
        hooks: H,
    ) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        let remote = hooks.before_set(default_provider());
        let local = hooks.before_set(default_provider());
        Self::from_parts(
            side,
            category.into(),
            name.into(),
            Arc::new(move || Ok::<T, BoxError>(default_provider())),
            local,
            remote,
            hooks,
        )
    }

    /// Like [`ConfigEntry::try_new`], with custom value hooks.
    pub fn try_with_hooks<F, E>(
        side: ConfigSide,
        category: impl Into<String>,
        name: impl Into<String>,
        default_provider: F,
        hooks: H,
    ) -> ConfigResult<Self>
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        let category = category.into();
        let name = name.into();
        let provider: DefaultProvider<T> = Arc::new(move || default_provider().map_err(Into::<BoxError>::into));

        let seed = |provider: &DefaultProvider<T>| {
            provider().map_err(|source| ConfigError::DefaultProvider {
                entry: format!("{category}.{name}"),
                source,
            })
        };
        let remote = hooks.before_set(seed(&provider)?);
        let local = hooks.before_set(seed(&provider)?);

        Ok(Self::from_parts(
            side, category, name, provider, local, remote, hooks,
        ))
    }

    fn from_parts(
        side: ConfigSide,
        category: String,
        name: String,
        default_provider: DefaultProvider<T>,
        local: T,
        remote: T,
        hooks: H,
    ) -> Self {
        Self {
            name,
            category,
            side,
            is_hidden: false,
            extra_categories: Vec::new(),
            display_name: None,
            description: None,
            owning_mod: None,
            default_provider,
            local,
            remote,
            hooks,
            net_role: Arc::new(NetModeCell::global().clone()),
        }
    }

    /// Replaces the network role consulted by side-aware reads and writes.
    /// Defaults to [`NetModeCell::global`].
    #[must_use]
    pub fn with_net_role(mut self, net_role: Arc<dyn NetRole>) -> Self {
        self.net_role = net_role;
        self
    }

    // ================================================================
    // Metadata
    // ================================================================

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// `<category>.<name>`, used to identify the entry in errors and logs.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.category, self.name)
    }

    #[must_use]
    pub fn side(&self) -> ConfigSide {
        self.side
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.is_hidden = hidden;
    }

    /// Secondary categories the entry is also listed under.
    #[must_use]
    pub fn extra_categories(&self) -> &[String] {
        &self.extra_categories
    }

    pub fn set_extra_categories<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_categories = categories.into_iter().map(Into::into).collect();
    }

    /// `None` until [`initialize`](Self::initialize) succeeds.
    #[must_use]
    pub fn display_name(&self) -> Option<&LocalizedText> {
        self.display_name.as_ref()
    }

    /// `None` until [`initialize`](Self::initialize) succeeds.
    #[must_use]
    pub fn description(&self) -> Option<&LocalizedText> {
        self.description.as_ref()
    }

    #[must_use]
    pub fn owning_mod(&self) -> Option<&ModHandle> {
        self.owning_mod.as_ref()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.owning_mod.is_some()
    }

    #[must_use]
    pub fn value_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    #[must_use]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    // ================================================================
    // Localization
    // ================================================================

    /// Builds `<namespace>.<mod>.<segment>.<category>.<name>.<suffix>` using
    /// the registry's key layout.
    #[must_use]
    pub fn localization_key(
        &self,
        registry: &dyn LocalizationRegistry,
        owning_mod: &ModHandle,
        suffix: &str,
    ) -> String {
        format!(
            "{}.{}.{}.{}.{}.{}",
            registry.namespace(),
            owning_mod.name(),
            registry.segment(),
            self.category,
            self.name,
            suffix
        )
    }

    /// Binds the entry to its owning mod and registers its display name and
    /// description, keeping any text already registered under those keys.
    ///
    /// Calling this again re-runs registration; the registry returns the
    /// existing texts. On error the entry keeps its previous state.
    pub fn initialize(
        &mut self,
        owning_mod: &ModHandle,
        registry: &dyn LocalizationRegistry,
    ) -> ConfigResult<()> {
        let display_key = self.localization_key(registry, owning_mod, DISPLAY_NAME_SUFFIX);
        let description_key = self.localization_key(registry, owning_mod, DESCRIPTION_SUFFIX);

        let display_name =
            registry.get_or_register(&display_key, &|| default_display_name(&self.name))?;
        let description = registry.get_or_register(&description_key, &String::new)?;

        self.owning_mod = Some(owning_mod.clone());
        self.display_name = Some(display_name);
        self.description = Some(description);
        debug!(entry = %self.qualified_name(), owning_mod = %owning_mod, "Config entry initialized");
        Ok(())
    }
}

impl<T: Clone + 'static, H: ValueHooks<T>> ConfigEntry<T, H> {
    /// Computes the default value. The provider runs on every call.
    pub fn default_value(&self) -> ConfigResult<T> {
        (self.default_provider)().map_err(|source| ConfigError::DefaultProvider {
            entry: self.qualified_name(),
            source,
        })
    }

    #[must_use]
    pub fn local_value(&self) -> T {
        self.hooks.before_get(self.local.clone())
    }

    pub fn set_local_value(&mut self, value: T) {
        self.local = self.hooks.before_set(value);
    }

    #[must_use]
    pub fn remote_value(&self) -> T {
        self.hooks.before_get(self.remote.clone())
    }

    pub fn set_remote_value(&mut self, value: T) {
        self.remote = self.hooks.before_set(value);
    }

    /// True when `value`/`set_value` currently use the remote slot.
    #[must_use]
    pub fn uses_remote_value(&self) -> bool {
        self.side == ConfigSide::Both && self.net_role.is_multiplayer_client()
    }

    /// The effective value for the current network role.
    #[must_use]
    pub fn value(&self) -> T {
        if self.uses_remote_value() {
            self.remote_value()
        } else {
            self.local_value()
        }
    }

    /// Writes the slot [`value`](Self::value) reads from.
    pub fn set_value(&mut self, value: T) {
        let remote = self.uses_remote_value();
        trace!(entry = %self.qualified_name(), remote, "Writing config value");
        if remote {
            self.set_remote_value(value);
        } else {
            self.set_local_value(value);
        }
    }

    /// Same as [`value`](Self::value).
    #[must_use]
    pub fn to_value(&self) -> T {
        self.value()
    }
}

impl<T: fmt::Debug, H> fmt::Debug for ConfigEntry<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigEntry")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("side", &self.side)
            .field("is_hidden", &self.is_hidden)
            .field("extra_categories", &self.extra_categories)
            .field("owning_mod", &self.owning_mod)
            .field("local", &self.local)
            .field("remote", &self.remote)
            .finish_non_exhaustive()
    }
}
