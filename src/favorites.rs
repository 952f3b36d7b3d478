// src/favorites.rs

//! Local favorites persistence
//!
//! A flat id → fields mapping serialized to a single JSON file in the
//! user's home directory. The file is loaded once at construction and
//! rewritten in full after every mutation. Writes are not atomic: for a
//! single-user local cache a torn file is acceptable, and loading treats a
//! corrupt file exactly like a missing one.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;

/// File name under the home directory
pub const FAVORITES_FILE_NAME: &str = ".recipe_finder_favorites.json";

/// Default on-disk location: `~/.recipe_finder_favorites.json`
pub fn default_favorites_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(FAVORITES_FILE_NAME)
}

/// Persistent store of favorited recipes.
///
/// Keys are the decimal string form of the recipe id; values are whatever
/// JSON object was passed at favorite-time, stored unvalidated and only
/// ever re-displayed.
pub struct FavoritesStore {
    path: PathBuf,
    favorites: HashMap<String, Value>,
}

impl FavoritesStore {
    /// Open the store at the default path
    pub fn open() -> Self {
        Self::with_path(default_favorites_path())
    }

    /// Open the store at an explicit path
    pub fn with_path(path: PathBuf) -> Self {
        let favorites = load_favorites(&path);
        Self { path, favorites }
    }

    /// Whether a recipe is currently favorited. In-memory membership only;
    /// the file is not re-read.
    pub fn is_favorite(&self, recipe_id: u64) -> bool {
        self.favorites.contains_key(&recipe_id.to_string())
    }

    /// Favorite a recipe, storing whatever fields the caller passes
    pub fn add(&mut self, recipe_id: u64, data: Value) -> Result<()> {
        self.favorites.insert(recipe_id.to_string(), data);
        self.save()
    }

    /// Unfavorite a recipe. Removing an id that is not present still
    /// rewrites the file.
    pub fn remove(&mut self, recipe_id: u64) -> Result<()> {
        self.favorites.remove(&recipe_id.to_string());
        self.save()
    }

    /// Flip the favorite state of a recipe; returns whether it is now a
    /// favorite
    pub fn toggle(&mut self, recipe_id: u64, data: Value) -> Result<bool> {
        if self.is_favorite(recipe_id) {
            self.remove(recipe_id)?;
            Ok(false)
        } else {
            self.add(recipe_id, data)?;
            Ok(true)
        }
    }

    /// Number of stored favorites
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Stored entries, id string → fields. No ordering guarantee.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.favorites.iter().map(|(id, data)| (id.as_str(), data))
    }

    /// Rewrite the whole file from the in-memory mapping
    fn save(&self) -> Result<()> {
        let body = serde_json::to_string(&self.favorites)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, body)?;
        debug!(
            "saved {} favorites to {}",
            self.favorites.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Read the favorites file. Missing, unreadable, or corrupt files all come
/// back as an empty mapping: the store favors availability over alerting.
fn load_favorites(path: &Path) -> HashMap<String, Value> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return HashMap::new(),
        Err(e) => {
            warn!("could not read {}: {}", path.display(), e);
            return HashMap::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(favorites) => favorites,
        Err(e) => {
            warn!("ignoring corrupt favorites file {}: {}", path.display(), e);
            HashMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn temp_store(dir: &tempfile::TempDir) -> FavoritesStore {
        FavoritesStore::with_path(dir.path().join(FAVORITES_FILE_NAME))
    }

    #[test]
    fn add_then_is_favorite() {
        let dir = tempdir().unwrap();
        let mut store = temp_store(&dir);
        assert!(!store.is_favorite(42));

        store.add(42, json!({"id": 42, "title": "Chicken Rice"})).unwrap();
        assert!(store.is_favorite(42));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_clears_membership() {
        let dir = tempdir().unwrap();
        let mut store = temp_store(&dir);

        store.add(42, json!({"id": 42})).unwrap();
        store.remove(42).unwrap();
        assert!(!store.is_favorite(42));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_absent_id_is_a_no_op() {
        let dir = tempdir().unwrap();
        let mut store = temp_store(&dir);

        store.add(7, json!({"id": 7})).unwrap();
        store.remove(42).unwrap();
        assert!(store.is_favorite(7));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn repeated_add_and_remove_in_any_order() {
        let dir = tempdir().unwrap();
        let mut store = temp_store(&dir);

        store.add(1, json!({})).unwrap();
        store.add(1, json!({"title": "updated"})).unwrap();
        assert!(store.is_favorite(1));
        assert_eq!(store.len(), 1, "re-adding the same id must not duplicate");

        store.remove(1).unwrap();
        store.remove(1).unwrap();
        assert!(!store.is_favorite(1));
    }

    #[test]
    fn toggle_flips_state() {
        let dir = tempdir().unwrap();
        let mut store = temp_store(&dir);

        assert!(store.toggle(3, json!({"id": 3})).unwrap());
        assert!(store.is_favorite(3));
        assert!(!store.toggle(3, json!({"id": 3})).unwrap());
        assert!(!store.is_favorite(3));
    }
}
