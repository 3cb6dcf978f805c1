//! Gateway bootstrap - the composition root.
//!
//! This module is the only place where backend clients are constructed.
//! Handlers receive them through [`GatewayContext`]; there is no ambient
//! global client state.

use anyhow::Result;

use chatgate_ollama::{OllamaClient, OllamaConfig};
use chatgate_openai::{OpenAiClient, OpenAiConfig};

/// CORS configuration for the gateway.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow any origin, method, and header.
    #[default]
    AllowAll,
    /// Allow specific origins only.
    AllowOrigins(Vec<String>),
}

/// Server configuration assembled by the CLI.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Cloud provider client configuration.
    pub openai: OpenAiConfig,
    /// Local daemon client configuration.
    pub ollama: OllamaConfig,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5001,
            openai: OpenAiConfig::default(),
            ollama: OllamaConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

/// Application context for the gateway.
///
/// Holds the backend clients; constructed once at process start and passed
/// into each route handler.
pub struct GatewayContext {
    /// Cloud model adapter client.
    pub openai: OpenAiClient,
    /// Local model adapter client.
    pub ollama: OllamaClient,
}

/// Build the gateway context from configuration.
pub fn bootstrap(config: &ServerConfig) -> Result<GatewayContext> {
    let openai = OpenAiClient::new(config.openai.clone())?;
    let ollama = OllamaClient::new(config.ollama.clone())?;
    Ok(GatewayContext { openai, ollama })
}
