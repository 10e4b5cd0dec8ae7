use dioxus::prelude::*;

use crate::initials;

/// Shared page header: brand area plus the profile chip with an initials
/// avatar.
#[component]
pub fn TopBar(display_name: String) -> Element {
    rsx! {
        header {
            class: "dashboard-header",
            div {
                class: "logo-area",
                span { class: "logo", "Feedboard" }
            }
            div {
                class: "profile-area",
                div { class: "avatar", "{initials(&display_name)}" }
                span { class: "user-name", "{display_name}" }
            }
        }
    }
}
