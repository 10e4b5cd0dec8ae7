//! # Prefs — durable storage of dashboard preferences
//!
//! [`Prefs`] reads and writes a [`UiState`] through the [`PrefStore`] trait,
//! so the same logic works against the browser's localStorage
//! ([`crate::LocalStorageStore`], web) and an in-memory map
//! ([`crate::MemoryStore`], native and tests).
//!
//! ## Storage layout
//!
//! Four string-keyed entries, one per preference field:
//!
//! | Key | Value | Fallback |
//! |-----|-------|----------|
//! | `"searchTerm"` | raw string | `""` |
//! | `"pageSize"` | decimal integer, one of 10/25/50 | `10` |
//! | `"currentPage"` | decimal integer ≥ 1 | `1` |
//! | `"sortConfig"` | JSON, e.g. `{"key":"name","direction":"asc"}` | unsorted |
//!
//! There is no schema versioning. A missing or malformed entry falls back to
//! its default **individually** — one corrupted key never discards the other
//! three.
//!
//! ## Error handling
//!
//! [`PrefStore`] implementations silently swallow backend errors (reads
//! degrade to `None`, writes are best-effort). An unavailable or corrupted
//! store means "default preferences", never a crash.

use crate::models::{sanitize_page_size, SortConfig, UiState};

const SEARCH_TERM_KEY: &str = "searchTerm";
const PAGE_SIZE_KEY: &str = "pageSize";
const CURRENT_PAGE_KEY: &str = "currentPage";
const SORT_CONFIG_KEY: &str = "sortConfig";

/// String key-value backend for preference storage.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Dashboard preferences backed by a [`PrefStore`].
pub struct Prefs<S: PrefStore> {
    store: S,
}

impl<S: PrefStore> Prefs<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Rehydrate the persisted [`UiState`], field by field.
    pub fn load(&self) -> UiState {
        let search_term = self.store.get(SEARCH_TERM_KEY).unwrap_or_default();
        let page_size = self
            .store
            .get(PAGE_SIZE_KEY)
            .and_then(|raw| raw.parse::<u32>().ok())
            .map(sanitize_page_size)
            .unwrap_or_else(|| UiState::default().page_size);
        let current_page = self
            .store
            .get(CURRENT_PAGE_KEY)
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);
        let sort = self
            .store
            .get(SORT_CONFIG_KEY)
            .and_then(|raw| serde_json::from_str::<SortConfig>(&raw).ok())
            .unwrap_or_default();

        UiState {
            search_term,
            page_size,
            current_page,
            sort,
        }
    }

    /// Persist every preference field. Invoked once after each transition.
    pub fn save(&self, state: &UiState) {
        self.store.set(SEARCH_TERM_KEY, &state.search_term);
        self.store.set(PAGE_SIZE_KEY, &state.page_size.to_string());
        self.store
            .set(CURRENT_PAGE_KEY, &state.current_page.to_string());
        if let Ok(json) = serde_json::to_string(&state.sort) {
            self.store.set(SORT_CONFIG_KEY, &json);
        }
    }
}
