//! CLI entry point - wires configuration into the gateway.
//!
//! The cloud credential is read once at startup from a dotenv file (or the
//! process environment); everything else comes from flags. Bootstrap and
//! serving live in `chatgate-axum`; this binary only assembles the config.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use chatgate_axum::{CorsConfig, ServerConfig, bootstrap, serve};
use chatgate_ollama::OllamaConfig;
use chatgate_openai::OpenAiConfig;

#[derive(Debug, Parser)]
#[command(name = "chatgate", about = "Uniform chat/image gateway over OpenAI and Ollama")]
struct Cli {
    /// Port to listen on.
    #[arg(long, default_value_t = 5001)]
    port: u16,

    /// Dotenv file holding OPENAI_API_KEY.
    #[arg(long, default_value = "openai.env")]
    env_file: PathBuf,

    /// Base URL of the local Ollama daemon.
    #[arg(long, default_value = "http://localhost:11434")]
    ollama_url: String,

    /// Restrict CORS to these origins (repeatable); default allows all.
    #[arg(long = "allow-origin")]
    allow_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // A missing env file is fine when the key is already in the environment.
    if let Err(e) = dotenvy::from_path(&cli.env_file) {
        debug!("Could not load {}: {e}", cli.env_file.display());
    }

    let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        warn!("OPENAI_API_KEY is not set; cloud routes will fail with auth errors");
    }

    let cors = if cli.allow_origins.is_empty() {
        CorsConfig::AllowAll
    } else {
        CorsConfig::AllowOrigins(cli.allow_origins)
    };

    let config = ServerConfig {
        port: cli.port,
        openai: OpenAiConfig::new().with_api_key(api_key),
        ollama: OllamaConfig::new().with_base_url(cli.ollama_url),
        cors,
    };

    let ctx = bootstrap(&config)?;
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    serve(listener, ctx, &config.cors).await
}
