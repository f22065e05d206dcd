//! Rule-based weather agent
//!
//! Weather questions are answered from the simulated weather source; anything
//! else goes to a chat-completion backend as a single user message. Each call
//! is independent: the agent keeps no conversation state.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::config::AgentSettings;
use crate::llm::ChatCompletion;
use crate::models::CompletionRequest;
use crate::router::Intent;
use crate::weather;

/// Prefix of every reply produced from a backend failure
pub const ERROR_REPLY_PREFIX: &str = "Sorry, I encountered an error:";

/// Answers free-text questions, weather ones locally
#[derive(Clone)]
pub struct WeatherAgent {
    llm: Arc<dyn ChatCompletion>,
    max_tokens: u32,
    temperature: f32,
}

impl WeatherAgent {
    /// Agent with the default sampling limits (100 tokens, temperature 0.7)
    pub fn new(llm: Arc<dyn ChatCompletion>) -> Self {
        Self::with_settings(llm, &AgentSettings::default())
    }

    pub fn with_settings(llm: Arc<dyn ChatCompletion>, settings: &AgentSettings) -> Self {
        Self {
            llm,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        }
    }

    /// Model used for non-weather questions
    #[must_use]
    pub fn model(&self) -> &str {
        self.llm.model()
    }

    /// Answer a query with a freshly seeded random source.
    ///
    /// Never fails: backend errors become an apology string.
    pub async fn respond(&self, query: &str) -> String {
        let mut rng = StdRng::seed_from_u64(rand::rng().random());
        self.respond_with_rng(query, &mut rng).await
    }

    /// Same as [`respond`](Self::respond) with a caller-supplied random source
    #[instrument(skip(self, rng), fields(query_len = query.len()))]
    pub async fn respond_with_rng<R: RngExt + Send>(&self, query: &str, rng: &mut R) -> String {
        let intent = Intent::classify(query);
        debug!(?intent, "Classified query");

        match intent {
            Intent::Forecast { city } => weather::five_day_forecast(city, rng).to_string(),
            Intent::CurrentWeather { city } => weather::current_weather(city, rng).to_string(),
            Intent::General => self.ask_llm(query).await,
        }
    }

    async fn ask_llm(&self, query: &str) -> String {
        let request = CompletionRequest::prompt(query, self.max_tokens, self.temperature);

        match self.llm.complete(&request).await {
            Ok(text) => {
                info!(model = self.llm.model(), "Answered via language model");
                text
            }
            Err(e) => {
                warn!(model = self.llm.model(), error = %e, "Language model call failed");
                format!("{ERROR_REPLY_PREFIX} {e}")
            }
        }
    }
}
