use dioxus::prelude::*;

/// Loading placeholder shown while a view's fetch is in flight.
#[component]
pub fn Loading() -> Element {
    rsx! {
        div {
            class: "loading",
            div { class: "spinner" }
        }
    }
}
