//! Chat-completion clients
//!
//! [`ChatCompletion`] is the seam between the agent and whatever model
//! answers general questions. Two HTTP implementations are provided: a local
//! Ollama server and the hosted Hugging Face inference router.

pub mod hf;
pub mod ollama;

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::Result;
use crate::config::{AgentConfig, Backend};
use crate::error::AgentError;
use crate::models::CompletionRequest;

pub use hf::HfInferenceClient;
pub use ollama::OllamaClient;

const USER_AGENT: &str = concat!("weather-agent/", env!("CARGO_PKG_VERSION"));

/// A service that turns role-tagged messages into generated text
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Model identifier sent with each request
    fn model(&self) -> &str;

    /// Run one completion and return the first candidate's text
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// Build the client for the configured backend
pub fn from_config(config: &AgentConfig) -> Result<Arc<dyn ChatCompletion>> {
    Ok(match config.agent.backend {
        Backend::Ollama => Arc::new(OllamaClient::new(&config.ollama)?),
        Backend::Hf => Arc::new(HfInferenceClient::new(&config.hf)?),
    })
}

/// Shared HTTP client construction; no timeout unless one is configured
pub(crate) fn http_client(timeout_seconds: Option<u64>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(secs) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| AgentError::config(format!("Failed to create HTTP client: {e}")))
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}
