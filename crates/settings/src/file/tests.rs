use super::*;

fn sockets() -> SettingDefinition {
    SettingDefinition::new("Mods.net", "Debug Sockets")
}

#[test]
fn bind_creates_entry_with_default() {
    let mut store = SettingsFile::in_memory();
    let handle = store.bind(sockets(), true, "sockets");
    assert!(store.get(handle));
    assert_eq!(store.len(), 1);
}

#[test]
fn rebinding_returns_same_handle_and_keeps_value() {
    let mut store = SettingsFile::in_memory();
    let first = store.bind(sockets(), false, "sockets");
    store.set(first, true).unwrap();

    let second = store.bind(sockets(), false, "sockets, reworded");
    assert_eq!(first, second);
    assert!(store.get(second));
    assert_eq!(store.len(), 1);

    let entry = store.entries().next().unwrap();
    assert_eq!(entry.description, Some("sockets, reworded"));
}

#[test]
fn loaded_value_wins_over_bind_default() {
    let mut store = SettingsFile::from_toml_str("[\"Mods.net\"]\n\"Debug Sockets\" = true\n").unwrap();
    let handle = store.bind(sockets(), false, "sockets");
    assert!(store.get(handle));

    let entry = store.entries().next().unwrap();
    assert_eq!(entry.default, Some(false));
}

#[test]
fn loaded_entries_are_unbound_until_bind() {
    let store = SettingsFile::from_toml_str("[\"Mods.net\"]\n\"Debug Sockets\" = false\n").unwrap();
    let entry = store.entries().next().unwrap();
    assert_eq!(entry.default, None);
    assert_eq!(entry.description, None);
    assert_eq!(store.lookup(&sockets()), Some(entry.handle));
}

#[test]
fn lookup_misses_unknown_definitions() {
    let store = SettingsFile::in_memory();
    assert_eq!(store.lookup(&sockets()), None);
}

#[test]
fn unknown_handle_reads_false_and_rejects_set() {
    let mut store = SettingsFile::in_memory();
    let foreign = SettingHandle(7);
    assert!(!store.get(foreign));
    assert!(matches!(
        store.set(foreign, true),
        Err(SettingsError::UnknownHandle(handle)) if handle == foreign
    ));
}

#[test]
fn in_memory_save_and_reload_are_noops() {
    let mut store = SettingsFile::in_memory();
    store.bind(sockets(), true, "sockets");
    store.save().unwrap();
    store.reload().unwrap();
    assert_eq!(store.len(), 1);
    assert!(store.path().is_none());
}

#[test]
fn entries_iterate_in_insertion_order() {
    let mut store = SettingsFile::in_memory();
    store.bind(SettingDefinition::new("b", "second"), false, "");
    store.bind(SettingDefinition::new("a", "first"), false, "");
    let keys: Vec<_> = store.entries().map(|e| e.definition.key().to_owned()).collect();
    assert_eq!(keys, ["second", "first"]);
}

#[test]
fn to_toml_string_includes_description_and_default() {
    let mut store = SettingsFile::in_memory();
    store.bind(sockets(), false, "Whether debug messages should be logged for net - Sockets");
    let rendered = store.to_toml_string();
    assert!(rendered.contains("[\"Mods.net\"]"));
    assert!(rendered.contains("## Whether debug messages should be logged for net - Sockets"));
    assert!(rendered.contains("# Default value: false"));
    assert!(rendered.contains("\"Debug Sockets\" = false"));
}
