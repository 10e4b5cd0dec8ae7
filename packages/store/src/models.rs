//! # Dashboard preference models
//!
//! Defines the persisted user-interface preferences for the dashboard view.
//! These types are `Serialize + Deserialize` so [`SortConfig`] can be stored
//! as JSON and the whole [`UiState`] can cross any serialisation boundary.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UiState`] | The complete preference snapshot: search term, page size, current page, and sort configuration. Immutable-until-replaced — every mutation goes through a transition method that returns a new snapshot. |
//! | [`SortConfig`] | The active sort column and direction, or nothing (original fetch order). Serialised with the wire names `"postId"`/`"name"`/`"email"` and `"asc"`/`"desc"`. |
//!
//! ## Transitions
//!
//! Each transition keeps the page invariant: `current_page` stays in
//! `[1, total_pages]`, and any change to the search term, page size, or sort
//! that could invalidate the current page resets it to 1.
//!
//! - [`UiState::with_search`] — replace the search term, reset to page 1.
//! - [`UiState::with_sort_cycled`] — cycle a column ascending → descending →
//!   unsorted (switching columns restarts at ascending), reset to page 1.
//! - [`UiState::with_page_size`] — switch between the allowed page sizes
//!   ([`PAGE_SIZES`]), reset to page 1.
//! - [`UiState::with_page`] — jump to a page, clamped into range.

use serde::{Deserialize, Serialize};

/// Page sizes offered by the dashboard.
pub const PAGE_SIZES: [u32; 3] = [10, 25, 50];

/// Default page size when nothing is persisted.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Columns the comment table can sort by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    PostId,
    Name,
    Email,
}

/// Sort direction for the active column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// The active sort column and direction. `Default` means unsorted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: Option<SortDirection>,
}

impl SortConfig {
    /// Cycle the sort state for a column click.
    ///
    /// Same column: ascending → descending → unsorted. A different column
    /// starts its own cycle at ascending and deactivates the previous one.
    pub fn cycled(self, key: SortKey) -> SortConfig {
        if self.key == Some(key) {
            match self.direction {
                Some(SortDirection::Asc) => SortConfig {
                    key: Some(key),
                    direction: Some(SortDirection::Desc),
                },
                _ => SortConfig::default(),
            }
        } else {
            SortConfig {
                key: Some(key),
                direction: Some(SortDirection::Asc),
            }
        }
    }

    /// Whether a sort is active.
    pub fn is_active(&self) -> bool {
        self.key.is_some() && self.direction.is_some()
    }
}

/// Persisted dashboard preferences.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    pub search_term: String,
    pub page_size: u32,
    pub current_page: u32,
    pub sort: SortConfig,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
            sort: SortConfig::default(),
        }
    }
}

impl UiState {
    /// Replace the search term and reset to the first page.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self.current_page = 1;
        self
    }

    /// Cycle the sort state for `key` and reset to the first page.
    pub fn with_sort_cycled(mut self, key: SortKey) -> Self {
        self.sort = self.sort.cycled(key);
        self.current_page = 1;
        self
    }

    /// Switch the page size and reset to the first page.
    ///
    /// A size outside [`PAGE_SIZES`] falls back to the default.
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = sanitize_page_size(size);
        self.current_page = 1;
        self
    }

    /// Jump to `page`, clamped into `[1, total_pages]` (page 1 when there
    /// are no pages at all).
    pub fn with_page(mut self, page: u32, total_pages: u32) -> Self {
        self.current_page = page.clamp(1, total_pages.max(1));
        self
    }
}

/// Clamp a requested page size to the allowed set.
pub fn sanitize_page_size(size: u32) -> u32 {
    if PAGE_SIZES.contains(&size) {
        size
    } else {
        DEFAULT_PAGE_SIZE
    }
}
