//! Local Ollama server client (`/api/chat`)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, error, info, instrument};

use super::{ChatCompletion, endpoint, http_client};
use crate::Result;
use crate::config::OllamaConfig;
use crate::error::AgentError;
use crate::models::{ChatMessage, CompletionRequest};

/// Client for a local Ollama server
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
    num_ctx: u32,
}

impl OllamaClient {
    /// Create a client from the Ollama section of the config
    pub fn new(config: &OllamaConfig) -> Result<Self> {
        Ok(Self {
            client: http_client(config.timeout_seconds)?,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            num_ctx: config.num_ctx,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[derive(Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    num_ctx: u32,
    num_predict: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct OllamaChatResponse {
    message: OllamaMessage,
}

#[derive(Deserialize)]
struct OllamaMessage {
    content: String,
}

#[derive(Deserialize)]
struct OllamaError {
    error: String,
}

#[async_trait]
impl ChatCompletion for OllamaClient {
    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(model = %self.model, messages = request.messages.len()))]
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let url = endpoint(&self.base_url, "api/chat");
        let body = OllamaChatRequest {
            model: &self.model,
            messages: &request.messages,
            stream: false,
            options: OllamaOptions {
                num_ctx: self.num_ctx,
                num_predict: request.max_tokens,
                temperature: request.temperature,
            },
        };

        debug!(url = %url, "Sending Ollama chat request");
        let start_time = Instant::now();

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, url = %url, "Failed to reach Ollama server");
                AgentError::network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OllamaError>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            error!(status = %status, error = %message, "Ollama returned error status");
            return Err(AgentError::http(status.as_u16(), message));
        }

        let parsed: OllamaChatResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse Ollama response");
            AgentError::invalid_response(format!("Failed to parse Ollama response: {e}"))
        })?;

        info!(
            "Ollama answered in {:.3}s",
            start_time.elapsed().as_secs_f64()
        );
        Ok(parsed.message.content)
    }
}
