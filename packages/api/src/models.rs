//! # Wire models for the feedback API
//!
//! These structs mirror the JSON returned by the upstream endpoints and are
//! `Serialize + Deserialize` so they can be decoded straight off the wire and
//! cloned freely into view state.
//!
//! - [`Comment`] — a feedback record from `GET /comments`. The wire field
//!   `postId` maps to `post_id`. Identity is `id`; records are immutable once
//!   fetched.
//! - [`User`] — a profile record from `GET /users`. Only the first element of
//!   the fetched collection is ever displayed. `address` is optional so a
//!   partial record degrades to a placeholder instead of a decode failure.
//! - [`Address`] — the nested address; only `street` and `city` are rendered.

use serde::{Deserialize, Serialize};

/// A feedback record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "postId")]
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// A user profile record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: Option<Address>,
}

/// Nested postal address on a [`User`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub suite: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
}

impl User {
    /// Street + city, or `None` when the record carries no address.
    pub fn short_address(&self) -> Option<String> {
        self.address
            .as_ref()
            .map(|a| format!("{}, {}", a.street, a.city))
    }
}
