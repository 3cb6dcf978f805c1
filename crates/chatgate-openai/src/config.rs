//! Configuration for the OpenAI client.

use std::time::Duration;

/// Configuration for the OpenAI client.
///
/// Use the builder methods to customize the client; the API key is the only
/// field without a sensible default.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Base URL for the OpenAI API.
    pub(crate) base_url: String,
    /// API key sent as a bearer token.
    pub(crate) api_key: String,
    /// Request timeout.
    pub(crate) timeout: Duration,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl OpenAiConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the OpenAI API.
    ///
    /// Defaults to `https://api.openai.com/v1`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key used for bearer authentication.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
