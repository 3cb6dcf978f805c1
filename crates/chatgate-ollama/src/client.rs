//! Reqwest-based Ollama client.

use tracing::debug;

use crate::config::OllamaConfig;
use crate::error::{OllamaError, OllamaResult};
use crate::models::{OllamaChatRequest, OllamaChatResponse, OllamaMessage, TagsResponse};

/// Client for a locally reachable Ollama daemon.
///
/// Constructed once at startup and shared read-only across requests.
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    /// Create a new client from the given configuration.
    pub fn new(config: OllamaConfig) -> OllamaResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// List available model names from the daemon's tag endpoint.
    pub async fn list_models(&self) -> OllamaResult<Vec<String>> {
        let url = format!("{}/api/tags", self.base_url);
        debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        let response = check_status(response).await?;

        let tags: TagsResponse = decode(response).await?;
        Ok(tags.models.into_iter().map(|entry| entry.name).collect())
    }

    /// Submit a non-streaming chat request and return the reply content.
    pub async fn chat(&self, model: &str, messages: Vec<OllamaMessage>) -> OllamaResult<String> {
        let url = format!("{}/api/chat", self.base_url);
        debug!(%model, turns = messages.len(), "POST {url}");

        let request = OllamaChatRequest {
            model: model.to_string(),
            messages,
            stream: false,
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let response = check_status(response).await?;

        let reply: OllamaChatResponse = decode(response).await?;
        Ok(reply.message.content)
    }
}

/// Decode a 2xx body, reporting a shape mismatch distinctly from a
/// transport failure.
async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> OllamaResult<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| OllamaError::InvalidResponse {
        message: e.to_string(),
    })
}

/// Turn a non-2xx response into an error carrying the status and body text.
async fn check_status(response: reqwest::Response) -> OllamaResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(OllamaError::Api {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_from_config() {
        let config = OllamaConfig::new().with_base_url("http://127.0.0.1:4242");
        let client = OllamaClient::new(config).unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:4242");
    }

    #[tokio::test]
    async fn list_models_reports_connection_failure() {
        // Nothing listens on port 9; discovery must surface a network error.
        let config = OllamaConfig::new().with_base_url("http://127.0.0.1:9");
        let client = OllamaClient::new(config).unwrap();

        let result = client.list_models().await;
        match result {
            Err(OllamaError::Network(_)) => {}
            other => panic!("expected network error, got {other:?}"),
        }
    }
}
