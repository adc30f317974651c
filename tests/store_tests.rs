//! Integration tests for the configuration store over real file storage.

use std::cell::RefCell;
use std::rc::Rc;

use tempfile::TempDir;
use werksite::config::{
    ConfigPatch, ConfigStore, DesignStyle, LayoutMode, LayoutPatch, SiteConfig, StylePatch,
    ThemePatch,
};
use werksite::constants::CONFIG_STORAGE_KEY;
use werksite::storage::{FileStorage, MemoryStorage, SettingsStorage};

fn file_store(dir: &TempDir) -> ConfigStore {
    let storage = FileStorage::open(dir.path().join("storage.json"));
    ConfigStore::open(Box::new(storage))
}

#[test]
fn test_first_load_no_storage_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);

    let config = store.config();
    assert!(config.system.is_first_visit);
    assert_eq!(config.layout.mode, LayoutMode::Onepage);
    assert_eq!(config, SiteConfig::new());
}

#[test]
fn test_update_survives_reload_from_disk() {
    let dir = TempDir::new().unwrap();

    let mut store = file_store(&dir);
    store.update(&ConfigPatch::design(DesignStyle::Klassik));
    store.update(&ConfigPatch::dark_mode(true));
    let before = store.config();
    drop(store);

    // A fresh store over the same file sees the same configuration
    let reloaded = file_store(&dir);
    assert_eq!(reloaded.config(), before);
    assert_eq!(reloaded.config().layout.design, DesignStyle::Klassik);
    assert!(reloaded.config().theme.dark_mode);
}

#[test]
fn test_independent_top_level_patches_round_trip() {
    let dir = TempDir::new().unwrap();

    let patches = [
        ConfigPatch::layout_mode(LayoutMode::Multipage),
        ConfigPatch::dark_mode(true),
        ConfigPatch {
            style: Some(StylePatch {
                package: Some(werksite::config::StylePackage::Modern),
                ..StylePatch::default()
            }),
            ..ConfigPatch::default()
        },
    ];

    let mut expected = SiteConfig::new();
    for patch in &patches {
        let mut store = file_store(&dir);
        store.update(patch);
        patch.apply_to(&mut expected);
        drop(store);

        let reloaded = file_store(&dir);
        assert_eq!(reloaded.config(), expected);
    }
}

#[test]
fn test_arbitrary_version_string_never_fails() {
    for version in ["", "0.0.1", "not-a-version", "999", "2.0.0-beta.7"] {
        let mut backend = MemoryStorage::new();
        backend.seed(
            CONFIG_STORAGE_KEY,
            format!(r#"{{"version":{}}}"#, serde_json::to_string(version).unwrap()),
        );
        let store = ConfigStore::open(Box::new(backend));
        let config = store.config();
        assert!(config.is_current_version(), "version {version:?}");
    }
}

#[test]
fn test_reset_after_updates_restores_compiled_defaults() {
    let dir = TempDir::new().unwrap();
    let mut store = file_store(&dir);

    store.update(&ConfigPatch {
        layout: Some(LayoutPatch {
            mode: Some(LayoutMode::Multipage),
            design: Some(DesignStyle::Modern),
            ..LayoutPatch::default()
        }),
        theme: Some(ThemePatch {
            dark_mode: Some(true),
            ..ThemePatch::default()
        }),
        ..ConfigPatch::default()
    });
    store.reset_to_defaults();

    assert_eq!(store.config(), SiteConfig::new());

    // The reset is persisted too
    drop(store);
    let reloaded = file_store(&dir);
    assert_eq!(reloaded.config(), SiteConfig::new());
}

#[test]
fn test_listener_counts_across_update_and_reset() {
    let dir = TempDir::new().unwrap();
    let mut store = file_store(&dir);

    let counts: Vec<Rc<RefCell<usize>>> = (0..3).map(|_| Rc::new(RefCell::new(0))).collect();
    let ids: Vec<_> = counts
        .iter()
        .map(|count| {
            let seen = Rc::clone(count);
            store.subscribe(Box::new(move |_, _| *seen.borrow_mut() += 1))
        })
        .collect();

    store.update(&ConfigPatch::dark_mode(true));
    assert!(counts.iter().all(|count| *count.borrow() == 1));

    // One unsubscribes; the others keep receiving
    store.unsubscribe(ids[1]);
    store.reset_to_defaults();
    assert_eq!(*counts[0].borrow(), 2);
    assert_eq!(*counts[1].borrow(), 1);
    assert_eq!(*counts[2].borrow(), 2);
}

#[test]
fn test_corrupt_primary_document_on_disk_recovers() {
    let dir = TempDir::new().unwrap();
    {
        let mut storage = FileStorage::open(dir.path().join("storage.json"));
        storage.set(CONFIG_STORAGE_KEY, "nonsense {{{").unwrap();
        storage.set("design-style", "rounded").unwrap();
    }

    let store = file_store(&dir);
    // Legacy migration picked up the flat key the broken document ignored
    assert_eq!(store.config().layout.design, DesignStyle::Rounded);
}

#[test]
fn test_rollback_then_stale_version_recovers_choices() {
    let dir = TempDir::new().unwrap();

    let mut store = file_store(&dir);
    store.update(&ConfigPatch::design(DesignStyle::Modern));
    store.rollback_to_legacy();
    drop(store);

    // Simulate a downgraded-then-upgraded install: the primary document
    // is gone, only legacy keys remain.
    let mut storage = FileStorage::open(dir.path().join("storage.json"));
    storage.remove(CONFIG_STORAGE_KEY).unwrap();
    drop(storage);

    let recovered = file_store(&dir);
    assert_eq!(recovered.config().layout.design, DesignStyle::Modern);
}
