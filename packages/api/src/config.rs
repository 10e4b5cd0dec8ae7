use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Endpoint configuration for the feedback API.
///
/// The client is configuration-light: no CLI flags, no environment
/// variables. `Default` points at the public demo API; tests and alternate
/// deployments construct one with [`ApiConfig::new`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// URL of the comment collection.
    pub fn comments_url(&self) -> String {
        format!("{}/comments", self.base_url)
    }

    /// URL of the user collection.
    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_api() {
        let config = ApiConfig::default();
        assert_eq!(
            config.comments_url(),
            "https://jsonplaceholder.typicode.com/comments"
        );
        assert_eq!(
            config.users_url(),
            "https://jsonplaceholder.typicode.com/users"
        );
    }

    #[test]
    fn trailing_slash_is_normalised() {
        let config = ApiConfig::new("http://localhost:3000/");
        assert_eq!(config.comments_url(), "http://localhost:3000/comments");
    }
}
