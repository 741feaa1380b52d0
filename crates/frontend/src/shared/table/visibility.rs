//! Hidden/visible state of table columns, persisted per table.
//!
//! The map is stored as JSON under `table-column-visibility-<tableKey>` so two
//! tables never share state. Hidden is a display concept only: exports still
//! contain every column.

use std::collections::BTreeMap;

const KEY_PREFIX: &str = "table-column-visibility-";

pub fn storage_key(table_key: &str) -> String {
    format!("{}{}", KEY_PREFIX, table_key)
}

/// Key-value persistence backing the visibility map
pub trait VisibilityStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Browser localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl VisibilityStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, column visibility not saved");
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("Failed to save column visibility under {}", key);
        }
    }
}

/// Column id → visible. Columns missing from the map are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnVisibility {
    columns: BTreeMap<String, bool>,
}

impl ColumnVisibility {
    /// Read the saved map; missing or unreadable data means "all visible"
    pub fn load(store: &impl VisibilityStore, table_key: &str) -> Self {
        let key = storage_key(table_key);
        let Some(json) = store.load(&key) else {
            return Self::default();
        };
        match serde_json::from_str::<BTreeMap<String, bool>>(&json) {
            Ok(columns) => Self { columns },
            Err(e) => {
                log::warn!("Ignoring corrupt column visibility for {}: {}", table_key, e);
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &impl VisibilityStore, table_key: &str) {
        match serde_json::to_string(&self.columns) {
            Ok(json) => store.save(&storage_key(table_key), &json),
            Err(e) => log::warn!("Failed to encode column visibility: {}", e),
        }
    }

    pub fn is_visible(&self, column_id: &str) -> bool {
        self.columns.get(column_id).copied().unwrap_or(true)
    }

    pub fn set_visible(&mut self, column_id: &str, visible: bool) {
        self.columns.insert(column_id.to_string(), visible);
    }

    /// Flip a column; returns its new visibility
    pub fn toggle(&mut self, column_id: &str) -> bool {
        let visible = !self.is_visible(column_id);
        self.set_visible(column_id, visible);
        visible
    }

    pub fn hidden_count(&self) -> usize {
        self.columns.values().filter(|visible| !**visible).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
    }

    impl VisibilityStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn save(&self, key: &str, value: &str) {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_defaults_to_all_visible() {
        let store = MemoryStore::default();
        let visibility = ColumnVisibility::load(&store, "brokers");
        assert!(visibility.is_visible("name"));
        assert_eq!(visibility.hidden_count(), 0);
    }

    #[test]
    fn test_round_trip_through_namespaced_key() {
        let store = MemoryStore::default();
        let mut visibility = ColumnVisibility::default();
        assert!(!visibility.toggle("country"));
        visibility.save(&store, "brokers");

        assert_eq!(
            store.load("table-column-visibility-brokers").as_deref(),
            Some(r#"{"country":false}"#)
        );
        let restored = ColumnVisibility::load(&store, "brokers");
        assert!(!restored.is_visible("country"));

        let other_table = ColumnVisibility::load(&store, "trades");
        assert!(other_table.is_visible("country"));
    }

    #[test]
    fn test_corrupt_blob_is_ignored() {
        let store = MemoryStore::default();
        store.save(&storage_key("brokers"), "{not json");
        assert_eq!(ColumnVisibility::load(&store, "brokers"), ColumnVisibility::default());
    }

    #[test]
    fn test_toggle_twice_restores_visibility() {
        let mut visibility = ColumnVisibility::default();
        visibility.toggle("symbol");
        assert!(visibility.toggle("symbol"));
        assert_eq!(visibility.hidden_count(), 0);
    }
}
