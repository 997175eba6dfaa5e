//! Persistence behaviour of the menu state store against real backends

use std::time::{Duration, Instant};

use dineboard::store::{
    MemoryBackend, MenuState, MenuStateStore, SqliteBackend, StorageBackend, MENU_STATE_KEY,
};
use proptest::prelude::*;

fn loaded(backend: MemoryBackend) -> MenuStateStore<MemoryBackend> {
    let mut store = MenuStateStore::new(backend);
    store.load();
    store
}

#[test]
fn test_corrupt_value_falls_back_to_defaults() {
    for raw in ["not json", "{\"expandedSections\": 3}", "[]", ""] {
        let store = loaded(MemoryBackend::seeded(MENU_STATE_KEY, raw));
        assert!(store.is_loaded(), "{raw:?}");
        assert_eq!(store.state(), &MenuState::default(), "{raw:?}");
    }
}

#[test]
fn test_missing_selected_item_is_tolerated() {
    let raw = r#"{"expandedSections":["Reports-0"],"scrollPosition":12}"#;
    let store = loaded(MemoryBackend::seeded(MENU_STATE_KEY, raw));
    assert!(store.is_expanded("Reports-0"));
    assert_eq!(store.selected_item(), None);
    assert_eq!(store.scroll_position(), 12);
}

#[test]
fn test_mutations_before_load_are_not_written() {
    let mut store = MenuStateStore::new(MemoryBackend::new());
    store.toggle_section("Reports-0");
    assert_eq!(store.backend().write_count(), 0);
    store.load();
    assert!(!store.is_expanded("Reports-0"));
}

#[test]
fn test_scroll_burst_writes_once() {
    let mut store = loaded(MemoryBackend::new());
    let start = Instant::now();
    store.set_scroll_position(10, start);
    store.set_scroll_position(20, start + Duration::from_millis(30));
    store.set_scroll_position(30, start + Duration::from_millis(60));

    assert!(!store.poll(start + Duration::from_millis(100)));
    assert_eq!(store.backend().write_count(), 0);

    assert!(store.poll(start + Duration::from_millis(160)));
    assert_eq!(store.scroll_position(), 30);
    assert_eq!(store.backend().write_count(), 1);

    let persisted = MenuState::from_json(store.backend().get(MENU_STATE_KEY).unwrap()).unwrap();
    assert_eq!(persisted.scroll_position, 30);
}

#[test]
fn test_flush_commits_pending_scroll() {
    let mut store = loaded(MemoryBackend::new());
    store.set_scroll_position(7, Instant::now());
    store.flush();
    assert!(!store.has_pending_scroll());
    assert_eq!(store.scroll_position(), 7);
    assert_eq!(store.backend().write_count(), 1);
}

#[test]
fn test_quota_failure_is_swallowed() {
    let mut store = loaded(MemoryBackend::with_quota(120));
    store.toggle_section("Financial Performance-0");
    assert_eq!(store.backend().write_count(), 1);

    // Pushes the record over the quota; the write fails but state moves on
    store.toggle_section("Operational Efficiency-0");
    store.toggle_section("Customer Experience-0");
    assert!(store.is_expanded("Operational Efficiency-0"));
    assert!(store.is_expanded("Customer Experience-0"));
    assert_eq!(store.backend().write_count(), 1);

    store.toggle_section("Operational Efficiency-0");
    store.toggle_section("Customer Experience-0");
    assert!(!store.is_expanded("Customer Experience-0"));
    // Back under the quota, so the record is written again
    assert_eq!(store.backend().write_count(), 2);
}

#[test]
fn test_clear_removes_record() {
    let mut store = loaded(MemoryBackend::new());
    store.toggle_section("Reports-0");
    store.set_selected_item(Some("/reports/builder".to_string()));
    store.set_scroll_position(40, Instant::now());
    store.clear();

    assert_eq!(store.state(), &MenuState::default());
    assert!(!store.has_pending_scroll());
    assert_eq!(store.backend().get(MENU_STATE_KEY), None);
}

#[test]
fn test_sqlite_backend_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.sqlite3");

    {
        let mut store = MenuStateStore::new(SqliteBackend::open(&path).unwrap());
        store.load();
        store.toggle_section("Labor Management-0");
        store.set_selected_item(Some("/labor/stability".to_string()));
    }

    let mut store = MenuStateStore::new(SqliteBackend::open(&path).unwrap());
    store.load();
    assert!(store.is_expanded("Labor Management-0"));
    assert_eq!(store.selected_item(), Some("/labor/stability"));

    store.clear();
    let backend = store.into_backend();
    assert_eq!(backend.read(MENU_STATE_KEY).unwrap(), None);
}

fn section_key() -> impl Strategy<Value = String> {
    (prop::sample::select(vec!["Reports", "Settings", "Labor Management", "Quality"]), 0usize..3)
        .prop_map(|(title, depth)| format!("{title}-{depth}"))
}

proptest! {
    #[test]
    fn toggle_parity(keys in prop::collection::vec(section_key(), 0..40)) {
        let mut store = loaded(MemoryBackend::new());
        for key in &keys {
            store.toggle_section(key);
        }
        for key in &keys {
            let toggles = keys.iter().filter(|k| *k == key).count();
            prop_assert_eq!(store.is_expanded(key), toggles % 2 == 1);
        }
        let mut sections = store.expanded_sections().to_vec();
        sections.sort();
        sections.dedup();
        prop_assert_eq!(sections.len(), store.expanded_sections().len());
    }

    #[test]
    fn save_then_fresh_load_round_trips(
        keys in prop::collection::btree_set(section_key(), 0..8),
        selected in prop::option::of("/[a-z]{1,8}(/[a-z-]{1,12})?"),
        offset in 0u64..10_000,
    ) {
        let mut store = loaded(MemoryBackend::new());
        for key in &keys {
            store.toggle_section(key);
        }
        store.set_selected_item(selected.clone());
        store.set_scroll_position(offset, Instant::now());
        store.flush();
        store.save();

        let mut fresh = MenuStateStore::new(store.into_backend());
        fresh.load();
        prop_assert_eq!(fresh.expanded_sections().len(), keys.len());
        for key in &keys {
            prop_assert!(fresh.is_expanded(key));
        }
        prop_assert_eq!(fresh.selected_item(), selected.as_deref());
        prop_assert_eq!(fresh.scroll_position(), offset);
    }
}
