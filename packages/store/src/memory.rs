use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::prefs::PrefStore;

/// In-memory PrefStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide instance so preferences survive across view activations
    /// within one native session.
    pub fn shared() -> Self {
        static SHARED: OnceLock<MemoryStore> = OnceLock::new();
        SHARED.get_or_init(MemoryStore::new).clone()
    }
}

impl PrefStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SortConfig, SortDirection, SortKey, UiState};
    use crate::prefs::Prefs;

    #[test]
    fn empty_store_loads_defaults() {
        let prefs = Prefs::new(MemoryStore::new());
        assert_eq!(prefs.load(), UiState::default());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let prefs = Prefs::new(MemoryStore::new());
        let state = UiState {
            search_term: "test".to_string(),
            page_size: 25,
            current_page: 2,
            sort: SortConfig {
                key: Some(SortKey::Name),
                direction: Some(SortDirection::Asc),
            },
        };
        prefs.save(&state);
        assert_eq!(prefs.load(), state);
    }

    #[test]
    fn rehydration_survives_a_new_prefs_instance() {
        // Simulates leaving and re-entering the dashboard: the store
        // outlives the Prefs facade.
        let store = MemoryStore::new();
        let state = UiState::default().with_page_size(10).with_page(2, 2);
        Prefs::new(store.clone()).save(&state);

        let reloaded = Prefs::new(store).load();
        assert_eq!(reloaded.current_page, 2);
    }

    #[test]
    fn malformed_entries_fall_back_individually() {
        let store = MemoryStore::new();
        store.set("searchTerm", "kept");
        store.set("pageSize", "not-a-number");
        store.set("currentPage", "0");
        store.set("sortConfig", "{broken json");

        let state = Prefs::new(store).load();
        assert_eq!(state.search_term, "kept");
        assert_eq!(state.page_size, 10);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.sort, SortConfig::default());
    }

    #[test]
    fn out_of_range_page_size_falls_back() {
        let store = MemoryStore::new();
        store.set("pageSize", "37");
        assert_eq!(Prefs::new(store).load().page_size, 10);
    }

    #[test]
    fn shared_store_is_the_same_instance() {
        MemoryStore::shared().set("searchTerm", "persisted");
        assert_eq!(
            MemoryStore::shared().get("searchTerm").as_deref(),
            Some("persisted")
        );
    }
}
