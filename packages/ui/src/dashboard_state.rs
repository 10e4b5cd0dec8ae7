//! # Dashboard derivation — filter, sort, paginate
//!
//! Pure functions that turn the fetched comment collection plus the current
//! [`UiState`] into what the table actually shows. Derivation runs
//! synchronously on every render; the inputs are small enough that nothing
//! is cached.
//!
//! - [`filter_and_sort`] — case-insensitive substring filter over name,
//!   email, and body (OR), then a stable sort on the active column.
//! - [`PageView::derive`] — the visible slice for the current page together
//!   with the figures the pagination controls need.

use api::Comment;
use store::{SortDirection, SortKey, UiState};

/// Apply the search filter and the active sort to the fetched collection.
///
/// With no active sort the original fetch order is preserved; the sort
/// itself is stable, so cycling a column back to unsorted restores exactly
/// that order.
pub fn filter_and_sort(comments: &[Comment], ui: &UiState) -> Vec<Comment> {
    let term = ui.search_term.to_lowercase();
    let mut rows: Vec<Comment> = comments
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&term)
                || c.email.to_lowercase().contains(&term)
                || c.body.to_lowercase().contains(&term)
        })
        .cloned()
        .collect();

    if let (Some(key), Some(direction)) = (ui.sort.key, ui.sort.direction) {
        rows.sort_by(|a, b| {
            let ordering = sort_value(a, key).cmp(&sort_value(b, key));
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    rows
}

// Comparison is lexicographic on the lowercased string form of the field,
// so post ids compare as text ("10" before "2").
fn sort_value(comment: &Comment, key: SortKey) -> String {
    match key {
        SortKey::PostId => comment.post_id.to_string(),
        SortKey::Name => comment.name.to_lowercase(),
        SortKey::Email => comment.email.to_lowercase(),
    }
}

/// The derived presentation data for one render of the dashboard table.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView {
    /// Rows visible on the current page.
    pub rows: Vec<Comment>,
    /// Matching rows across all pages.
    pub total: usize,
    /// `ceil(total / page_size)`; zero when nothing matches.
    pub total_pages: u32,
    /// 1-based index of the first visible row, 0 when the page is empty.
    pub start: usize,
    /// 1-based index of the last visible row, 0 when the page is empty.
    pub end: usize,
}

impl PageView {
    pub fn derive(comments: &[Comment], ui: &UiState) -> PageView {
        let sorted = filter_and_sort(comments, ui);
        let total = sorted.len();
        let total_pages = total.div_ceil(ui.page_size as usize) as u32;

        let offset = ui.current_page.saturating_sub(1) as usize * ui.page_size as usize;
        let rows: Vec<Comment> = sorted
            .into_iter()
            .skip(offset)
            .take(ui.page_size as usize)
            .collect();

        let (start, end) = if rows.is_empty() {
            (0, 0)
        } else {
            (offset + 1, offset + rows.len())
        };

        PageView {
            rows,
            total,
            total_pages,
            start,
            end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::SortConfig;

    fn comment(id: i64, post_id: i64, name: &str, email: &str, body: &str) -> Comment {
        Comment {
            id,
            post_id,
            name: name.to_string(),
            email: email.to_string(),
            body: body.to_string(),
        }
    }

    fn fixture(n: usize) -> Vec<Comment> {
        (1..=n as i64)
            .map(|i| {
                comment(
                    i,
                    (i + 1) / 2,
                    &format!("comment number {i}"),
                    &format!("author{i}@example.org"),
                    &format!("body text {i}"),
                )
            })
            .collect()
    }

    fn ids(rows: &[Comment]) -> Vec<i64> {
        rows.iter().map(|c| c.id).collect()
    }

    #[test]
    fn pages_partition_the_filtered_sequence() {
        let comments = fixture(53);
        for page_size in store::PAGE_SIZES {
            let ui = UiState::default().with_page_size(page_size);
            let full = filter_and_sort(&comments, &ui);
            let total_pages = PageView::derive(&comments, &ui).total_pages;
            assert_eq!(total_pages, 53_u32.div_ceil(page_size));

            let mut gathered = Vec::new();
            for page in 1..=total_pages {
                let view = PageView::derive(&comments, &ui.clone().with_page(page, total_pages));
                assert!(view.rows.len() <= page_size as usize);
                gathered.extend(view.rows);
            }
            assert_eq!(gathered, full);
        }
    }

    #[test]
    fn twelve_items_split_ten_and_two() {
        let comments = fixture(12);
        let ui = UiState::default();

        let page1 = PageView::derive(&comments, &ui);
        assert_eq!(page1.total_pages, 2);
        assert_eq!(ids(&page1.rows), (1..=10).collect::<Vec<_>>());
        assert_eq!((page1.start, page1.end, page1.total), (1, 10, 12));

        let page2 = PageView::derive(&comments, &ui.with_page(2, 2));
        assert_eq!(ids(&page2.rows), vec![11, 12]);
        assert_eq!((page2.start, page2.end), (11, 12));
    }

    #[test]
    fn filter_is_case_insensitive_across_fields() {
        let comments = vec![
            comment(1, 1, "Alpha", "a@x.org", "nothing"),
            comment(2, 1, "beta", "ALPHA@x.org", "nothing"),
            comment(3, 2, "gamma", "g@x.org", "an alPHa mention"),
            comment(4, 2, "delta", "d@x.org", "unrelated"),
        ];
        let ui = UiState::default().with_search("alpha");
        assert_eq!(ids(&filter_and_sort(&comments, &ui)), vec![1, 2, 3]);
    }

    #[test]
    fn empty_term_matches_everything() {
        let comments = fixture(5);
        let ui = UiState::default();
        assert_eq!(filter_and_sort(&comments, &ui).len(), 5);
    }

    #[test]
    fn zero_matches_mean_zero_rows_and_zero_pages() {
        let comments = fixture(12);
        let ui = UiState::default().with_search("no such term");
        let view = PageView::derive(&comments, &ui);
        assert!(view.rows.is_empty());
        assert_eq!(view.total, 0);
        assert_eq!(view.total_pages, 0);
        assert_eq!((view.start, view.end), (0, 0));
    }

    #[test]
    fn sort_cycle_restores_fetch_order() {
        let comments = vec![
            comment(1, 9, "zeta", "z@x.org", "-"),
            comment(2, 3, "alpha", "a@x.org", "-"),
            comment(3, 5, "mike", "m@x.org", "-"),
        ];
        let original = ids(&filter_and_sort(&comments, &UiState::default()));

        let mut ui = UiState::default();
        ui = ui.with_sort_cycled(SortKey::Name);
        assert_eq!(ids(&filter_and_sort(&comments, &ui)), vec![2, 3, 1]);

        ui = ui.with_sort_cycled(SortKey::Name);
        assert_eq!(ids(&filter_and_sort(&comments, &ui)), vec![1, 3, 2]);

        ui = ui.with_sort_cycled(SortKey::Name);
        assert_eq!(ui.sort, SortConfig::default());
        assert_eq!(ids(&filter_and_sort(&comments, &ui)), original);
    }

    #[test]
    fn sort_is_stable_on_equal_keys() {
        let comments = vec![
            comment(1, 1, "same", "c@x.org", "-"),
            comment(2, 1, "same", "a@x.org", "-"),
            comment(3, 1, "same", "b@x.org", "-"),
        ];
        let ui = UiState::default().with_sort_cycled(SortKey::Name);
        // All names equal: fetch order must survive the sort.
        assert_eq!(ids(&filter_and_sort(&comments, &ui)), vec![1, 2, 3]);
    }

    #[test]
    fn post_id_sorts_as_text() {
        let comments = vec![
            comment(1, 2, "a", "a@x.org", "-"),
            comment(2, 10, "b", "b@x.org", "-"),
            comment(3, 1, "c", "c@x.org", "-"),
        ];
        let ui = UiState::default().with_sort_cycled(SortKey::PostId);
        // "1" < "10" < "2" lexicographically.
        assert_eq!(ids(&filter_and_sort(&comments, &ui)), vec![3, 2, 1]);
    }

    #[test]
    fn sort_ignores_case() {
        let comments = vec![
            comment(1, 1, "Zeta", "z@x.org", "-"),
            comment(2, 1, "alpha", "a@x.org", "-"),
            comment(3, 1, "Beta", "b@x.org", "-"),
        ];
        let ui = UiState::default().with_sort_cycled(SortKey::Name);
        assert_eq!(ids(&filter_and_sort(&comments, &ui)), vec![2, 3, 1]);
    }

    #[test]
    fn descending_reverses_ascending() {
        let comments = fixture(7);
        let asc = UiState::default().with_sort_cycled(SortKey::Email);
        let desc = asc.clone().with_sort_cycled(SortKey::Email);

        let mut reversed = filter_and_sort(&comments, &asc);
        reversed.reverse();
        assert_eq!(filter_and_sort(&comments, &desc), reversed);
    }

    #[test]
    fn page_beyond_range_renders_empty() {
        // A stale persisted page (data shrank between sessions) degrades to
        // an empty slice rather than a panic.
        let comments = fixture(5);
        let ui = UiState {
            current_page: 4,
            ..UiState::default()
        };
        let view = PageView::derive(&comments, &ui);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_pages, 1);
    }
}
