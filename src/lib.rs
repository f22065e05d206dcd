//! `weather-agent` - a rule-based weather agent over LLM inference endpoints
//!
//! This library provides a keyword router with a simulated weather source,
//! plus chat-completion clients for a local Ollama server and the hosted
//! Hugging Face inference router.

pub mod agent;
pub mod config;
pub mod demo;
pub mod error;
pub mod llm;
pub mod models;
pub mod router;
pub mod weather;

// Re-export core types for public API
pub use agent::WeatherAgent;
pub use config::{AgentConfig, Backend};
pub use error::AgentError;
pub use llm::{ChatCompletion, HfInferenceClient, OllamaClient};
pub use models::{ChatMessage, CompletionRequest, Condition, CurrentWeather, Forecast, Role};
pub use router::Intent;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AgentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
