use dioxus::prelude::*;
use store::PAGE_SIZES;

/// Pagination controls: item-range label, one numbered button per page,
/// prev/next arrows with a compact current/next indicator, and the
/// page-size selector.
///
/// Numbered buttons are not windowed for large page counts; the page count
/// here stays small enough that one button per page is acceptable.
#[component]
pub fn Pagination(
    current_page: u32,
    total_pages: u32,
    page_size: u32,
    total_items: usize,
    start: usize,
    end: usize,
    on_page: EventHandler<u32>,
    on_page_size: EventHandler<u32>,
) -> Element {
    rsx! {
        div {
            class: "pagination-container",
            div {
                class: "item-info",
                "{start}-{end} of {total_items} items"
            }

            div {
                class: "page-numbers",
                for page in 1..=total_pages {
                    button {
                        key: "{page}",
                        class: if page == current_page { "page-number active" } else { "page-number" },
                        onclick: move |_| on_page.call(page),
                        "{page}"
                    }
                }
            }

            div {
                class: "pagination-controls",
                button {
                    class: "pagination-arrow",
                    disabled: current_page <= 1,
                    onclick: move |_| on_page.call(current_page.saturating_sub(1)),
                    "<"
                }

                span { class: "page-number active", "{current_page}" }
                if current_page < total_pages {
                    span {
                        class: "page-number",
                        onclick: move |_| on_page.call(current_page + 1),
                        "{current_page + 1}"
                    }
                }

                button {
                    class: "pagination-arrow",
                    disabled: current_page >= total_pages,
                    onclick: move |_| on_page.call(current_page + 1),
                    ">"
                }

                select {
                    class: "items-per-page",
                    value: "{page_size}",
                    onchange: move |evt| {
                        if let Ok(size) = evt.value().parse::<u32>() {
                            on_page_size.call(size);
                        }
                    },
                    for size in PAGE_SIZES {
                        option { value: "{size}", "{size} / Page" }
                    }
                }
            }
        }
    }
}
