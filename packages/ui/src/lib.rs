//! This crate contains all shared UI for the workspace.

mod dashboard_state;
pub use dashboard_state::{filter_and_sort, PageView};

mod comments_table;
pub use comments_table::CommentsTable;

mod sort_controls;
pub use sort_controls::SortControls;

mod pagination;
pub use pagination::Pagination;

mod topbar;
pub use topbar::TopBar;

mod loading;
pub use loading::Loading;

/// Avatar glyph: the first letter of up to the first two
/// whitespace-separated tokens of a display name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().next())
        .collect()
}
