use thiserror::Error;

use crate::config::ApiConfig;
use crate::models::{Comment, User};

/// Errors from talking to the feedback API.
///
/// Both variants keep the URL so a single log line identifies the failing
/// collection. Callers handle these locally (empty table, placeholder
/// profile); nothing here is fatal to the application.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Fetch the full comment collection.
pub async fn fetch_comments(config: &ApiConfig) -> Result<Vec<Comment>, ApiError> {
    let url = config.comments_url();
    let response = reqwest::get(&url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|source| ApiError::Request {
            url: url.clone(),
            source,
        })?;
    response
        .json()
        .await
        .map_err(|source| ApiError::Decode { url, source })
}

/// Fetch the user collection and keep only its first record.
pub async fn fetch_first_user(config: &ApiConfig) -> Result<Option<User>, ApiError> {
    let url = config.users_url();
    let response = reqwest::get(&url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|source| ApiError::Request {
            url: url.clone(),
            source,
        })?;
    let users: Vec<User> = response
        .json()
        .await
        .map_err(|source| ApiError::Decode { url, source })?;
    Ok(users.into_iter().next())
}
