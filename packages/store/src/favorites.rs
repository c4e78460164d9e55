//! # Favorites: locally saved cards
//!
//! An ordered list of [`SavedItem`] snapshots under the `"favorites"` key. The
//! list only grows: cards append to it and the favorites page reads it. It is
//! never synced to the backend.

use crate::kv::KeyValueStore;
use crate::models::SavedItem;

/// Storage key of the favorites array.
pub const FAVORITES_KEY: &str = "favorites";

#[derive(Clone, Debug)]
pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved items in the order they were added; empty if absent or malformed.
    pub fn list(&self) -> Vec<SavedItem> {
        let Some(raw) = self.store.get(FAVORITES_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Ignoring malformed favorites list: {}", e);
                Vec::new()
            }
        }
    }

    /// Append `item` unless an entry with the same id is already saved.
    /// Returns whether the list changed.
    pub fn add(&self, item: SavedItem) -> bool {
        let mut items = self.list();
        if items.iter().any(|existing| existing.id == item.id) {
            return false;
        }
        items.push(item);
        match serde_json::to_string(&items) {
            Ok(json) => {
                self.store.set(FAVORITES_KEY, &json);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to encode favorites list: {}", e);
                false
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.list().iter().any(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::SavedKind;

    fn item(id: &str, kind: SavedKind) -> SavedItem {
        SavedItem {
            id: id.to_string(),
            kind,
            title: format!("Title {id}"),
            description: None,
            url: None,
            external: id.starts_with("ext-"),
        }
    }

    #[test]
    fn test_absent_or_malformed_is_empty() {
        let store = MemoryStore::new();
        let favorites = FavoritesStore::new(store.clone());
        assert!(favorites.list().is_empty());

        for raw in ["", "{", "null", "{}", r#"[{"id": 1}]"#] {
            store.set(FAVORITES_KEY, raw);
            assert!(favorites.list().is_empty(), "expected empty for {raw}");
        }
    }

    #[test]
    fn test_add_preserves_order() {
        let favorites = FavoritesStore::new(MemoryStore::new());

        assert!(favorites.add(item("4", SavedKind::Trial)));
        assert!(favorites.add(item("ext-pub-77", SavedKind::Publication)));
        assert!(favorites.add(item("ext-trial-NCT1", SavedKind::Trial)));

        let ids: Vec<String> = favorites.list().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["4", "ext-pub-77", "ext-trial-NCT1"]);
        assert!(favorites.contains("ext-pub-77"));
    }

    #[test]
    fn test_add_skips_duplicate_id() {
        let favorites = FavoritesStore::new(MemoryStore::new());
        assert!(favorites.add(item("4", SavedKind::Trial)));
        assert!(!favorites.add(item("4", SavedKind::Trial)));
        assert_eq!(favorites.list().len(), 1);
    }

    #[test]
    fn test_add_over_malformed_starts_fresh() {
        let store = MemoryStore::new();
        store.set(FAVORITES_KEY, "garbage");
        let favorites = FavoritesStore::new(store);

        assert!(favorites.add(item("1", SavedKind::Publication)));
        assert_eq!(favorites.list().len(), 1);
    }

    #[test]
    fn test_wire_shape_uses_type_field() {
        let store = MemoryStore::new();
        let favorites = FavoritesStore::new(store.clone());
        favorites.add(item("1", SavedKind::Publication));

        let raw = store.get(FAVORITES_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["type"], "publication");
    }
}
