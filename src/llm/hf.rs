//! Hosted Hugging Face inference client
//!
//! Talks to the OpenAI-compatible chat completions route of the Hugging Face
//! inference router. The bearer token is optional at construction time: a
//! missing token is reported by [`HfInferenceClient::has_token`] so callers
//! can skip network work instead of failing.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

use super::{ChatCompletion, endpoint, http_client};
use crate::Result;
use crate::config::HfConfig;
use crate::error::AgentError;
use crate::models::{ChatMessage, CompletionRequest};

/// Client for the Hugging Face inference router
#[derive(Clone)]
pub struct HfInferenceClient {
    client: Client,
    base_url: String,
    model: String,
    token: Option<String>,
}

impl std::fmt::Debug for HfInferenceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HfInferenceClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl HfInferenceClient {
    /// Create a client from the HF section of the config
    pub fn new(config: &HfConfig) -> Result<Self> {
        if config.token.is_none() {
            warn!("No Hugging Face token configured; requests will be unauthenticated");
        }

        Ok(Self {
            client: http_client(config.timeout_seconds)?,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            token: config.token.clone(),
        })
    }

    /// Whether a bearer token will be sent
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

#[derive(Serialize)]
struct ChatCompletionsRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionsResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl ChatCompletion for HfInferenceClient {
    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(model = %self.model, messages = request.messages.len()))]
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let url = endpoint(&self.base_url, "chat/completions");
        let body = ChatCompletionsRequest {
            model: &self.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        debug!(url = %url, authenticated = self.has_token(), "Sending HF chat request");
        let start_time = Instant::now();

        let mut builder = self.client.post(&url).json(&body);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| {
            error!(error = %e, url = %url, "Failed to reach HF inference router");
            AgentError::network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %text, "HF inference returned error status");
            return Err(AgentError::http(status.as_u16(), text.trim()));
        }

        let parsed: ChatCompletionsResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse HF response");
            AgentError::invalid_response(format!("Failed to parse HF response: {e}"))
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AgentError::invalid_response("No content in HF response"))?;

        info!(
            "HF inference answered in {:.3}s",
            start_time.elapsed().as_secs_f64()
        );
        Ok(content)
    }
}
