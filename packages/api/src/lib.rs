//! # API crate — remote data source for the Feedboard client
//!
//! Everything the frontends need to talk to the public feedback API lives
//! here: the wire models ([`Comment`], [`User`], [`Address`]), the endpoint
//! configuration ([`ApiConfig`]), and the async fetch functions built on
//! [`reqwest`] (which compiles to the browser's `fetch` on WASM).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Serde models matching the upstream JSON shape |
//! | `config` | Endpoint base URL and per-collection URL helpers |
//! | `client` | `fetch_comments` / `fetch_first_user` and [`ApiError`] |
//!
//! Each view issues exactly one read per activation; there is no retry,
//! caching, or request deduplication layer.

mod client;
mod config;
pub mod models;

pub use client::{fetch_comments, fetch_first_user, ApiError};
pub use config::ApiConfig;
pub use models::{Address, Comment, User};
