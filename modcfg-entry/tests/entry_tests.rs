use modcfg_entry::{Clamp, ConfigEntry, ConfigError, ValueHooks};
use modcfg_types::{ConfigSide, NetMode, NetModeCell};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

fn entry_with_role(side: ConfigSide, default: i32) -> (ConfigEntry<i32>, NetModeCell) {
    let role = NetModeCell::new(NetMode::SinglePlayer);
    let entry = ConfigEntry::new(side, "General", "MaxPlayers", move || default)
        .with_net_role(Arc::new(role.clone()));
    (entry, role)
}

// ── Construction ─────────────────────────────────────────────────

#[test]
fn new_seeds_both_slots_from_default() {
    let (entry, _) = entry_with_role(ConfigSide::Both, 10);
    assert_eq!(entry.local_value(), 10);
    assert_eq!(entry.remote_value(), 10);
    assert_eq!(entry.default_value().unwrap(), 10);
}

#[test]
fn new_sets_metadata() {
    let (entry, _) = entry_with_role(ConfigSide::Remote, 1);
    assert_eq!(entry.name(), "MaxPlayers");
    assert_eq!(entry.category(), "General");
    assert_eq!(entry.qualified_name(), "General.MaxPlayers");
    assert_eq!(entry.side(), ConfigSide::Remote);
    assert!(!entry.is_hidden());
    assert!(entry.extra_categories().is_empty());
    assert_eq!(entry.value_type_name(), "i32");
}

#[test]
fn uninitialized_entry_has_no_localization() {
    let (entry, _) = entry_with_role(ConfigSide::Local, 1);
    assert!(entry.display_name().is_none());
    assert!(entry.description().is_none());
    assert!(entry.owning_mod().is_none());
    assert!(!entry.is_initialized());
}

#[test]
fn provider_runs_once_per_slot_at_construction() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&calls);
    let _entry = ConfigEntry::new(ConfigSide::Local, "General", "Counter", move || {
        counter.fetch_add(1, Ordering::SeqCst)
    });
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn default_value_is_not_cached() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&calls);
    let entry = ConfigEntry::new(ConfigSide::Local, "General", "Counter", move || {
        counter.fetch_add(1, Ordering::SeqCst)
    });
    let first = entry.default_value().unwrap();
    let second = entry.default_value().unwrap();
    assert_eq!(second, first + 1);
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn try_new_propagates_provider_failure() {
    let err = ConfigEntry::<i32>::try_new(ConfigSide::Local, "General", "Broken", || {
        Err::<i32, _>("no default available")
    })
    .unwrap_err();
    match err {
        ConfigError::DefaultProvider { entry, source } => {
            assert_eq!(entry, "General.Broken");
            assert_eq!(source.to_string(), "no default available");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn try_new_succeeds_with_working_provider() {
    let entry = ConfigEntry::try_new(ConfigSide::Both, "General", "Volume", || {
        Ok::<_, std::io::Error>(0.5_f32)
    })
    .unwrap();
    assert_eq!(entry.local_value(), 0.5);
    assert_eq!(entry.default_value().unwrap(), 0.5);
}

#[test]
fn default_value_reports_later_provider_failure() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&calls);
    let entry = ConfigEntry::try_new(ConfigSide::Local, "General", "Flaky", move || {
        if counter.fetch_add(1, Ordering::SeqCst) < 2 {
            Ok(7)
        } else {
            Err("provider exhausted")
        }
    })
    .unwrap();
    assert_eq!(entry.local_value(), 7);
    assert!(matches!(
        entry.default_value(),
        Err(ConfigError::DefaultProvider { .. })
    ));
}

fn effective_and_default<T: Clone + 'static>(entry: &ConfigEntry<T>) -> (T, T) {
    (entry.to_value(), entry.default_value().unwrap())
}

#[test]
fn accessors_work_for_generic_callers() {
    let mut entry = ConfigEntry::new(ConfigSide::Local, "Ui", "Scale", || 1.5_f64);
    entry.set_value(2.0);
    assert_eq!(effective_and_default(&entry), (2.0, 1.5));
}

// ── Side routing ─────────────────────────────────────────────────

#[test]
fn both_side_offline_uses_local_slot() {
    let (mut entry, _) = entry_with_role(ConfigSide::Both, 10);
    assert_eq!(entry.value(), 10);
    entry.set_value(20);
    assert_eq!(entry.local_value(), 20);
    assert_eq!(entry.remote_value(), 10);
}

#[test]
fn both_side_client_reads_untouched_remote_slot() {
    let (mut entry, role) = entry_with_role(ConfigSide::Both, 10);
    entry.set_value(20);

    role.set(NetMode::MultiplayerClient);
    assert!(entry.uses_remote_value());
    assert_eq!(entry.value(), 10);
}

#[test]
fn both_side_client_writes_remote_slot() {
    let (mut entry, role) = entry_with_role(ConfigSide::Both, 10);
    role.set(NetMode::MultiplayerClient);
    entry.set_value(30);
    assert_eq!(entry.value(), 30);
    assert_eq!(entry.remote_value(), 30);
    assert_eq!(entry.local_value(), 10);
}

#[test]
fn server_role_uses_local_slot() {
    let (mut entry, role) = entry_with_role(ConfigSide::Both, 10);
    role.set(NetMode::Server);
    entry.set_value(5);
    assert_eq!(entry.local_value(), 5);
    assert_eq!(entry.remote_value(), 10);
}

#[test]
fn local_and_remote_sides_ignore_role() {
    for side in [ConfigSide::Local, ConfigSide::Remote] {
        let (mut entry, role) = entry_with_role(side, 1);
        role.set(NetMode::MultiplayerClient);
        assert!(!entry.uses_remote_value());
        entry.set_value(2);
        assert_eq!(entry.value(), 2);
        assert_eq!(entry.local_value(), 2);
        assert_eq!(entry.remote_value(), 1);
    }
}

#[test]
fn to_value_matches_value() {
    let (mut entry, role) = entry_with_role(ConfigSide::Both, 3);
    entry.set_remote_value(9);
    assert_eq!(entry.to_value(), 3);
    role.set(NetMode::MultiplayerClient);
    assert_eq!(entry.to_value(), 9);
}

#[test]
fn slot_setters_are_independent() {
    let (mut entry, _) = entry_with_role(ConfigSide::Both, 0);
    entry.set_local_value(1);
    entry.set_remote_value(2);
    assert_eq!(entry.local_value(), 1);
    assert_eq!(entry.remote_value(), 2);
}

// ── Metadata setters ─────────────────────────────────────────────

#[test]
fn hidden_flag_and_extra_categories() {
    let (mut entry, _) = entry_with_role(ConfigSide::Local, 0);
    entry.set_hidden(true);
    entry.set_extra_categories(["Camera", "Accessibility"]);
    assert!(entry.is_hidden());
    assert_eq!(entry.extra_categories(), ["Camera", "Accessibility"]);
}

#[test]
fn debug_lists_slots() {
    let (entry, _) = entry_with_role(ConfigSide::Local, 4);
    let debug = format!("{entry:?}");
    assert!(debug.contains("MaxPlayers"));
    assert!(debug.contains("local: 4"));
}

// ── Hooks ────────────────────────────────────────────────────────

#[test]
fn clamp_applies_to_seeding_and_writes() {
    let mut entry = ConfigEntry::with_hooks(
        ConfigSide::Local,
        "Audio",
        "Volume",
        || 150,
        Clamp::new(0, 100),
    );
    assert_eq!(entry.local_value(), 100);
    assert_eq!(entry.remote_value(), 100);
    // The default itself is reported as provided.
    assert_eq!(entry.default_value().unwrap(), 150);

    entry.set_value(-5);
    assert_eq!(entry.value(), 0);
    entry.set_remote_value(42);
    assert_eq!(entry.remote_value(), 42);
    assert_eq!(entry.hooks().max(), &100);
}

struct Doubling;

impl ValueHooks<i32> for Doubling {
    fn before_get(&self, value: i32) -> i32 {
        value * 2
    }
}

#[test]
fn custom_get_hook_transforms_reads() {
    let role = NetModeCell::new(NetMode::MultiplayerClient);
    let mut entry = ConfigEntry::with_hooks(ConfigSide::Both, "General", "Scale", || 3, Doubling)
        .with_net_role(Arc::new(role));
    assert_eq!(entry.local_value(), 6);
    entry.set_value(5);
    assert_eq!(entry.value(), 10);
    assert_eq!(entry.local_value(), 6);
}

#[test]
fn string_entries_clone_on_read() {
    let mut entry = ConfigEntry::new(ConfigSide::Local, "Ui", "Theme", || "dark".to_string());
    let before = entry.value();
    entry.set_value("light".into());
    assert_eq!(before, "dark");
    assert_eq!(entry.value(), "light");
}
