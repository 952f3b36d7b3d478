// tests/favorites.rs

//! Persistence tests for the favorites store
//!
//! These exercise the on-disk lifecycle: round-trips across store
//! instances, silent recovery from corrupt files, and mutations surviving
//! a restart-equivalent reload.

use larder::{FavoritesStore, FAVORITES_FILE_NAME};
use serde_json::json;
use tempfile::tempdir;

fn store_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
    dir.path().join(FAVORITES_FILE_NAME)
}

#[test]
fn missing_file_loads_empty() {
    let dir = tempdir().unwrap();
    let store = FavoritesStore::with_path(store_path(&dir));
    assert!(store.is_empty(), "store without a file should start empty");
}

#[test]
fn save_then_fresh_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = store_path(&dir);

    let mut store = FavoritesStore::with_path(path.clone());
    store
        .add(
            42,
            json!({
                "id": 42,
                "title": "Chicken Rice",
                "used_ingredients": ["chicken", "rice"],
                "missed_ingredients": []
            }),
        )
        .unwrap();
    store.add(7, json!({"id": 7, "title": "Plain Toast"})).unwrap();

    let reloaded = FavoritesStore::with_path(path);
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.is_favorite(42));
    assert!(reloaded.is_favorite(7));

    let (_, data) = reloaded.iter().find(|(id, _)| *id == "42").unwrap();
    assert_eq!(data.get("title").and_then(|t| t.as_str()), Some("Chicken Rice"));
    assert_eq!(
        data.get("used_ingredients").unwrap(),
        &json!(["chicken", "rice"])
    );
}

#[test]
fn truncated_json_is_treated_as_empty() {
    let dir = tempdir().unwrap();
    let path = store_path(&dir);
    std::fs::write(&path, "{").unwrap();

    let store = FavoritesStore::with_path(path);
    assert!(store.is_empty(), "truncated JSON should load as empty");
}

#[test]
fn non_object_json_is_treated_as_empty() {
    let dir = tempdir().unwrap();
    let path = store_path(&dir);
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let store = FavoritesStore::with_path(path);
    assert!(store.is_empty(), "non-object JSON should load as empty");
}

#[test]
fn corrupt_file_is_replaced_on_next_save() {
    let dir = tempdir().unwrap();
    let path = store_path(&dir);
    std::fs::write(&path, "{\"42\": ").unwrap();

    let mut store = FavoritesStore::with_path(path.clone());
    store.add(7, json!({"id": 7})).unwrap();

    let reloaded = FavoritesStore::with_path(path);
    assert!(reloaded.is_favorite(7));
    assert!(!reloaded.is_favorite(42), "corrupt entries are gone for good");
}

#[test]
fn remove_persists_across_instances() {
    let dir = tempdir().unwrap();
    let path = store_path(&dir);

    let mut store = FavoritesStore::with_path(path.clone());
    store.add(42, json!({"id": 42})).unwrap();
    store.add(7, json!({"id": 7})).unwrap();
    store.remove(42).unwrap();

    let reloaded = FavoritesStore::with_path(path);
    assert!(!reloaded.is_favorite(42));
    assert!(reloaded.is_favorite(7));
}

#[test]
fn arbitrary_json_values_survive_the_round_trip() {
    let dir = tempdir().unwrap();
    let path = store_path(&dir);

    let data = json!({
        "id": 3,
        "title": "Weird Entry",
        "nested": {"numbers": [1, 2.5, -3], "flag": true, "nothing": null}
    });

    let mut store = FavoritesStore::with_path(path.clone());
    store.add(3, data.clone()).unwrap();

    let reloaded = FavoritesStore::with_path(path);
    let (_, stored) = reloaded.iter().find(|(id, _)| *id == "3").unwrap();
    assert_eq!(stored, &data, "values are stored verbatim, not normalized");
}
