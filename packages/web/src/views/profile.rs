use api::{ApiConfig, User};
use dioxus::prelude::*;

use ui::{initials, Loading, TopBar};

use crate::Route;

const PROFILE_CSS: Asset = asset!("/assets/profile.css");

// The upstream user record carries no display-stable numeric id.
// TODO: swap in the real user id field once the backend supplies one.
const USER_ID_PLACEHOLDER: &str = "12345687";

#[component]
pub fn Profile() -> Element {
    let mut user = use_signal(|| Option::<User>::None);
    let mut loading = use_signal(|| true);
    let mut load_failed = use_signal(|| false);
    let nav = use_navigator();

    let _loader = use_resource(move || async move {
        match api::fetch_first_user(&ApiConfig::default()).await {
            Ok(found) => user.set(found),
            Err(e) => {
                tracing::error!("failed to load user profile: {e}");
                load_failed.set(true);
            }
        }
        loading.set(false);
    });

    rsx! {
        document::Stylesheet { href: PROFILE_CSS }

        div {
            class: "profile-container",

            if loading() {
                Loading {}
            } else {
                if let Some(u) = user() {
                    TopBar { display_name: u.name.clone() }

                    div {
                        class: "profile-content",
                        button {
                            class: "back-button",
                            onclick: move |_| {
                                nav.push(Route::Dashboard {});
                            },
                            "\u{2190} Welcome, {u.name}"
                        }

                        div {
                            class: "profile-card",
                            div {
                                class: "profile-left",
                                div { class: "profile-avatar-circle", "{initials(&u.name)}" }
                                div { class: "profile-name", "{u.name}" }
                                div { class: "profile-email", "{u.email}" }
                            }
                            div {
                                class: "profile-right",
                                div {
                                    class: "profile-row",
                                    ProfileField { label: "User ID", value: USER_ID_PLACEHOLDER.to_string() }
                                    ProfileField { label: "Name", value: u.name.clone() }
                                }
                                div {
                                    class: "profile-row",
                                    ProfileField { label: "Email ID", value: u.email.clone() }
                                    ProfileField {
                                        label: "Address",
                                        value: u.short_address().unwrap_or_else(|| "\u{2014}".to_string()),
                                    }
                                }
                                div {
                                    class: "profile-row",
                                    ProfileField { label: "Phone", value: display_or_dash(&u.phone) }
                                }
                            }
                        }
                    }
                } else {
                    TopBar { display_name: "Feedboard" }

                    div {
                        class: "profile-content",
                        button {
                            class: "back-button",
                            onclick: move |_| {
                                nav.push(Route::Dashboard {});
                            },
                            "\u{2190} Back"
                        }
                        if load_failed() {
                            div { class: "load-error", "Failed to load profile." }
                        } else {
                            div { class: "profile-placeholder", "No profile data." }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileField(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "profile-group",
            label { "{label}" }
            div { class: "profile-field", "{value}" }
        }
    }
}

fn display_or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "\u{2014}".to_string()
    } else {
        value.to_string()
    }
}
