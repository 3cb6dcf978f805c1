//! Configuration for the Ollama client.

use std::time::Duration;

/// Default base URL for a locally running Ollama daemon.
pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Configuration for the Ollama client.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL of the Ollama daemon.
    pub(crate) base_url: String,
    /// Request timeout.
    pub(crate) timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl OllamaConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Ollama daemon.
    ///
    /// Defaults to `http://localhost:11434`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
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
