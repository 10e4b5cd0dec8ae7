use api::{ApiConfig, Comment};
use dioxus::prelude::*;

use store::UiState;
use ui::{CommentsTable, PageView, Pagination, SortControls, TopBar};

use super::make_prefs;
use crate::Route;

const DASHBOARD_CSS: Asset = asset!("/assets/dashboard.css");

#[component]
pub fn Dashboard() -> Element {
    let mut comments = use_signal(Vec::<Comment>::new);
    let mut load_failed = use_signal(|| false);
    let mut ui_state = use_signal(|| make_prefs().load());
    let nav = use_navigator();

    // One read per activation. The resource owns the in-flight future and
    // drops it on unmount, so a late response never touches a dead view.
    let _loader = use_resource(move || async move {
        match api::fetch_comments(&ApiConfig::default()).await {
            Ok(list) => comments.set(list),
            Err(e) => {
                tracing::error!("failed to load comments: {e}");
                load_failed.set(true);
            }
        }
    });

    // Every transition goes through here: persist first, then replace the
    // snapshot.
    let mut apply = move |next: UiState| {
        make_prefs().save(&next);
        ui_state.set(next);
    };

    let ui = ui_state();
    let view = PageView::derive(&comments.read(), &ui);
    let total_pages = view.total_pages;

    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }

        div {
            class: "dashboard-container",

            TopBar { display_name: "Ervin Howell" }

            div {
                class: "dashboard-content",

                div {
                    class: "dashboard-controls",
                    SortControls {
                        sort: ui.sort,
                        on_sort: move |key| apply(ui_state().with_sort_cycled(key)),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Search name, email, comment",
                        value: "{ui.search_term}",
                        oninput: move |evt| apply(ui_state().with_search(evt.value())),
                    }
                }

                if load_failed() {
                    div { class: "load-error", "Failed to load comments." }
                }

                CommentsTable { rows: view.rows.clone() }

                div {
                    class: "profile-styling",
                    button {
                        class: "profile-button",
                        onclick: move |_| {
                            nav.push(Route::Profile {});
                        },
                        "View Profile"
                    }
                }

                Pagination {
                    current_page: ui.current_page,
                    total_pages: total_pages,
                    page_size: ui.page_size,
                    total_items: view.total,
                    start: view.start,
                    end: view.end,
                    on_page: move |page| apply(ui_state().with_page(page, total_pages)),
                    on_page_size: move |size| apply(ui_state().with_page_size(size)),
                }
            }
        }
    }
}
