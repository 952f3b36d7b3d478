// src/config.rs

//! API endpoint configuration
//!
//! The key and base URL are injected into the client at construction rather
//! than read from process-wide state, so tests can point the client at a
//! mock endpoint.

/// Production Spoonacular endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Environment variable the binary consults for the API key
pub const API_KEY_ENV: &str = "SPOONACULAR_API_KEY";

/// Connection settings for the recipe API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Endpoint root, stored without a trailing slash
    pub base_url: String,
    /// Key passed as the `apiKey` query parameter on every call
    pub api_key: String,
}

impl ApiConfig {
    /// Configuration against the production endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the endpoint root (mock servers, proxies)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_production() {
        let config = ApiConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key, "key");
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let config = ApiConfig::new("key").with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }
}
