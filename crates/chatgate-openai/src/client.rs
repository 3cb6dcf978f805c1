//! Reqwest-based OpenAI client.

use tracing::debug;

use crate::catalog::IMAGE_MODEL;
use crate::config::OpenAiConfig;
use crate::error::{OpenAiError, OpenAiResult};
use crate::models::{
    ChatCompletionRequest, ChatCompletionResponse, ChatTurn, ImageGenerationRequest,
    ImageGenerationResponse,
};

/// Image generation parameters are fixed; the gateway exposes no knobs.
const IMAGE_SIZE: &str = "1024x1024";
const IMAGE_QUALITY: &str = "standard";

/// Client for the OpenAI chat-completion and image-generation endpoints.
///
/// Constructed once at startup and shared read-only across requests.
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    /// Create a new client from the given configuration.
    pub fn new(config: OpenAiConfig) -> OpenAiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Submit an ordered message list and return the first choice's content.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatTurn>,
    ) -> OpenAiResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(%model, turns = messages.len(), "POST {url}");

        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let response = check_status(response).await?;

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| OpenAiError::InvalidResponse {
                message: "response contained no choices".to_string(),
            })
    }

    /// Generate a single 1024x1024 standard-quality image and return its URL.
    pub async fn generate_image(&self, prompt: &str) -> OpenAiResult<String> {
        let url = format!("{}/images/generations", self.base_url);
        debug!(prompt_len = prompt.len(), "POST {url}");

        let request = ImageGenerationRequest {
            model: IMAGE_MODEL.to_string(),
            prompt: prompt.to_string(),
            size: IMAGE_SIZE.to_string(),
            quality: IMAGE_QUALITY.to_string(),
            n: 1,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let response = check_status(response).await?;

        let generation: ImageGenerationResponse = response.json().await?;
        generation
            .data
            .into_iter()
            .next()
            .map(|image| image.url)
            .ok_or_else(|| OpenAiError::InvalidResponse {
                message: "response contained no images".to_string(),
            })
    }
}

/// Turn a non-2xx response into an error carrying the body text.
async fn check_status(response: reqwest::Response) -> OpenAiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(OpenAiError::ApiRequestFailed {
        status: status.as_u16(),
        body,
    })
}
