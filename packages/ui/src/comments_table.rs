use api::Comment;
use dioxus::prelude::*;

/// The dashboard's comment table. Rendering only — filtering, sorting, and
/// slicing happen in [`crate::PageView::derive`] before the rows get here.
#[component]
pub fn CommentsTable(rows: Vec<Comment>) -> Element {
    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "PostID" }
                    th { "Name" }
                    th { "Email" }
                    th { "Comment" }
                }
            }
            tbody {
                for c in rows {
                    tr {
                        key: "{c.id}",
                        td { "{c.post_id}" }
                        td { "{c.name}" }
                        td { "{c.email}" }
                        td { "{preview(&c.body)}" }
                    }
                }
            }
        }
    }
}

// First 50 characters of the body, always ellipsised.
fn preview(body: &str) -> String {
    let cut: String = body.chars().take(50).collect();
    format!("{cut}...")
}
