//! Untyped view over [`ConfigEntry`] for code that handles entries of mixed types.

use crate::entry::ConfigEntry;
use crate::error::{ConfigError, ConfigResult};
use crate::hooks::ValueHooks;
use modcfg_localization::{LocalizationRegistry, LocalizedText};
use modcfg_types::{ConfigSide, ModHandle};
use std::any::{Any, TypeId};

/// Object-safe access to a configuration entry without naming its value type.
///
/// Values cross this boundary boxed. Writes downcast to the entry's type and
/// fail with [`ConfigError::TypeMismatch`], leaving the slot unchanged, when
/// the box holds anything else.
pub trait ErasedConfigEntry: Send + Sync {
    fn name(&self) -> &str;
    fn category(&self) -> &str;
    fn side(&self) -> ConfigSide;
    fn is_hidden(&self) -> bool;
    fn extra_categories(&self) -> &[String];
    fn display_name(&self) -> Option<&LocalizedText>;
    fn description(&self) -> Option<&LocalizedText>;
    fn owning_mod(&self) -> Option<&ModHandle>;

    fn value_type_id(&self) -> TypeId;
    fn value_type_name(&self) -> &'static str;

    fn value_any(&self) -> Box<dyn Any + Send>;
    fn set_value_any(&mut self, value: Box<dyn Any + Send>) -> ConfigResult<()>;
    fn local_value_any(&self) -> Box<dyn Any + Send>;
    fn set_local_value_any(&mut self, value: Box<dyn Any + Send>) -> ConfigResult<()>;
    fn remote_value_any(&self) -> Box<dyn Any + Send>;
    fn set_remote_value_any(&mut self, value: Box<dyn Any + Send>) -> ConfigResult<()>;
    fn default_value_any(&self) -> ConfigResult<Box<dyn Any + Send>>;

    fn initialize(
        &mut self,
        owning_mod: &ModHandle,
        registry: &dyn LocalizationRegistry,
    ) -> ConfigResult<()>;
}

impl<T, H> ConfigEntry<T, H>
where
    T: Clone + Send + Sync + 'static,
    H: ValueHooks<T>,
{
    fn downcast(&self, value: Box<dyn Any + Send>) -> ConfigResult<T> {
        value
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| ConfigError::TypeMismatch {
                entry: self.qualified_name(),
                expected: std::any::type_name::<T>(),
            })
    }
}

impl<T, H> ErasedConfigEntry for ConfigEntry<T, H>
where
    T: Clone + Send + Sync + 'static,
    H: ValueHooks<T>,
{
    fn name(&self) -> &str {
        ConfigEntry::name(self)
    }

    fn category(&self) -> &str {
        ConfigEntry::category(self)
    }

    fn side(&self) -> ConfigSide {
        ConfigEntry::side(self)
    }

    fn is_hidden(&self) -> bool {
        ConfigEntry::is_hidden(self)
    }

    fn extra_categories(&self) -> &[String] {
        ConfigEntry::extra_categories(self)
    }

    fn display_name(&self) -> Option<&LocalizedText> {
        ConfigEntry::display_name(self)
    }

    fn description(&self) -> Option<&LocalizedText> {
        ConfigEntry::description(self)
    }

    fn owning_mod(&self) -> Option<&ModHandle> {
        ConfigEntry::owning_mod(self)
    }

    fn value_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn value_type_name(&self) -> &'static str {
        ConfigEntry::value_type_name(self)
    }

    fn value_any(&self) -> Box<dyn Any + Send> {
        Box::new(self.value())
    }

    fn set_value_any(&mut self, value: Box<dyn Any + Send>) -> ConfigResult<()> {
        let value = self.downcast(value)?;
        self.set_value(value);
        Ok(())
    }

    fn local_value_any(&self) -> Box<dyn Any + Send> {
        Box::new(self.local_value())
    }

    fn set_local_value_any(&mut self, value: Box<dyn Any + Send>) -> ConfigResult<()> {
        let value = self.downcast(value)?;
        self.set_local_value(value);
        Ok(())
    }

    fn remote_value_any(&self) -> Box<dyn Any + Send> {
        Box::new(self.remote_value())
    }

    fn set_remote_value_any(&mut self, value: Box<dyn Any + Send>) -> ConfigResult<()> {
        let value = self.downcast(value)?;
        self.set_remote_value(value);
        Ok(())
    }

    fn default_value_any(&self) -> ConfigResult<Box<dyn Any + Send>> {
        Ok(Box::new(self.default_value()?))
    }

    fn initialize(
        &mut self,
        owning_mod: &ModHandle,
        registry: &dyn LocalizationRegistry,
    ) -> ConfigResult<()> {
        ConfigEntry::initialize(self, owning_mod, registry)
    }
}
