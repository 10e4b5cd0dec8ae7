use dioxus::prelude::*;
use store::{SortConfig, SortDirection, SortKey};

/// One sort button per sortable column, with the cycle indicator.
#[component]
pub fn SortControls(sort: SortConfig, on_sort: EventHandler<SortKey>) -> Element {
    rsx! {
        button {
            onclick: move |_| on_sort.call(SortKey::PostId),
            "Sort Post ID {glyph(&sort, SortKey::PostId)}"
        }
        button {
            onclick: move |_| on_sort.call(SortKey::Name),
            "Sort Name {glyph(&sort, SortKey::Name)}"
        }
        button {
            onclick: move |_| on_sort.call(SortKey::Email),
            "Sort Email {glyph(&sort, SortKey::Email)}"
        }
    }
}

fn glyph(sort: &SortConfig, key: SortKey) -> &'static str {
    if sort.key != Some(key) {
        return "\u{25B2}\u{25BC}";
    }
    match sort.direction {
        Some(SortDirection::Asc) => "\u{25B2}",
        Some(SortDirection::Desc) => "\u{25BC}",
        None => "\u{25B2}\u{25BC}",
    }
}
