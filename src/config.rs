//! Configuration management for the weather agent
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::AgentError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the Hugging Face access token
pub const HF_TOKEN_ENV: &str = "HF_TOKEN";

/// Root configuration structure for the weather agent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Local Ollama server settings
    pub ollama: OllamaConfig,
    /// Hosted Hugging Face inference settings
    pub hf: HfConfig,
    /// Agent behaviour settings
    pub agent: AgentSettings,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Local Ollama server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server
    pub base_url: String,
    /// Model tag to run
    pub model: String,
    /// Context window passed to the server
    pub num_ctx: u32,
    /// Request timeout in seconds; unset means wait indefinitely
    pub timeout_seconds: Option<u64>,
}

/// Hosted Hugging Face inference settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HfConfig {
    /// Base URL of the OpenAI-compatible inference router
    pub base_url: String,
    /// Hub model id
    pub model: String,
    /// Access token; falls back to `HF_TOKEN`
    pub token: Option<String>,
    /// Request timeout in seconds; unset means wait indefinitely
    pub timeout_seconds: Option<u64>,
}

/// Which chat-completion endpoint answers general questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Ollama,
    Hf,
}

/// Agent behaviour settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    /// Backend used for non-weather queries
    pub backend: Backend,
    /// Output token limit for non-weather queries
    pub max_tokens: u32,
    /// Sampling temperature for non-weather queries
    pub temperature: f32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or compact)
    pub format: String,
}

/// An exported but blank token counts as no token
fn non_blank(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}

// Default value functions
fn default_ollama_base_url() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_ollama_model() -> String {
    "qwen2:7b".to_string()
}

fn default_num_ctx() -> u32 {
    8192
}

fn default_hf_base_url() -> String {
    "https://router.huggingface.co/v1".to_string()
}

fn default_hf_model() -> String {
    "meta-llama/Llama-4-Scout-17B-16E-Instruct".to_string()
}

fn default_max_tokens() -> u32 {
    100
}

fn default_temperature() -> f32 {
    0.7
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_ollama_base_url(),
            model: default_ollama_model(),
            num_ctx: default_num_ctx(),
            timeout_seconds: None,
        }
    }
}

impl Default for HfConfig {
    fn default() -> Self {
        Self {
            base_url: default_hf_base_url(),
            model: default_hf_model(),
            token: None,
            timeout_seconds: None,
        }
    }
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl AgentConfig {
    /// Load configuration from the default file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(config_file) = Self::resolve_config_file(config_path)? {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. WEATHER_AGENT_OLLAMA__MODEL=llama3
        builder = builder.add_source(
            Environment::with_prefix("WEATHER_AGENT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AgentConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        if config.hf.token.is_none() {
            config.hf.token = non_blank(std::env::var(HF_TOKEN_ENV).ok());
        }

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// The config file that will be read, if any.
    ///
    /// An explicit path must exist; the default locations are optional.
    pub fn resolve_config_file(config_path: Option<&Path>) -> Result<Option<PathBuf>> {
        let config_file = config_path
            .map(Path::to_path_buf)
            .or_else(Self::get_config_path)
            .unwrap_or_else(|| PathBuf::from("config.toml"));

        if config_file.exists() {
            Ok(Some(config_file))
        } else if config_path.is_some() {
            Err(AgentError::config(format!(
                "Config file not found: {}",
                config_file.display()
            ))
            .into())
        } else {
            Ok(None)
        }
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("weather-agent").join("config.toml"))
    }

    /// Apply default values to blank configuration fields
    pub fn apply_defaults(&mut self) {
        if self.ollama.base_url.is_empty() {
            self.ollama.base_url = default_ollama_base_url();
        }
        if self.ollama.model.is_empty() {
            self.ollama.model = default_ollama_model();
        }
        if self.ollama.num_ctx == 0 {
            self.ollama.num_ctx = default_num_ctx();
        }
        if self.hf.base_url.is_empty() {
            self.hf.base_url = default_hf_base_url();
        }
        if self.hf.model.is_empty() {
            self.hf.model = default_hf_model();
        }
        if self.agent.max_tokens == 0 {
            self.agent.max_tokens = default_max_tokens();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_token()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the optional access token
    pub fn validate_token(&self) -> Result<()> {
        if let Some(token) = &self.hf.token {
            if token.trim().is_empty() {
                return Err(AgentError::config(
                    "HF token cannot be empty if provided. Either unset it or provide a valid token.",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.agent.temperature) {
            return Err(AgentError::config(format!(
                "Sampling temperature must be between 0 and 2, got {}",
                self.agent.temperature
            ))
            .into());
        }

        for (name, timeout) in [
            ("ollama", self.ollama.timeout_seconds),
            ("hf", self.hf.timeout_seconds),
        ] {
            if timeout.is_some_and(|secs| secs == 0 || secs > 300) {
                return Err(AgentError::config(format!(
                    "{name} timeout must be between 1 and 300 seconds"
                ))
                .into());
            }
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AgentError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "compact"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AgentError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("Ollama", &self.ollama.base_url),
            ("HF", &self.hf.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AgentError::config(format!(
                    "{name} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AgentConfig::default();
        assert_eq!(config.ollama.base_url, "http://127.0.0.1:11434");
        assert_eq!(config.ollama.model, "qwen2:7b");
        assert_eq!(config.ollama.num_ctx, 8192);
        assert_eq!(config.hf.model, "meta-llama/Llama-4-Scout-17B-16E-Instruct");
        assert_eq!(config.agent.backend, Backend::Ollama);
        assert_eq!(config.agent.max_tokens, 100);
        assert!((config.agent.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.logging.level, "info");
        assert!(config.hf.token.is_none());
        assert!(config.ollama.timeout_seconds.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AgentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_token() {
        let mut config = AgentConfig::default();
        config.hf.token = Some("   ".to_string());
        let result = config.validate_token();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = AgentConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_temperature_range() {
        let mut config = AgentConfig::default();
        config.agent.temperature = 3.5;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("temperature"));
    }

    #[test]
    fn test_config_validation_timeout_range() {
        let mut config = AgentConfig::default();
        config.hf.timeout_seconds = Some(500);
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("hf timeout"));
    }

    #[test]
    fn test_config_validation_bad_url() {
        let mut config = AgentConfig::default();
        config.ollama.base_url = "127.0.0.1:11434".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Ollama base URL"));
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = AgentConfig::default();
        config.ollama.model.clear();
        config.agent.max_tokens = 0;
        config.apply_defaults();
        assert_eq!(config.ollama.model, "qwen2:7b");
        assert_eq!(config.agent.max_tokens, 100);
    }

    #[test]
    fn test_blank_env_token_counts_as_absent() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(
            non_blank(Some("hf_abc".to_string())),
            Some("hf_abc".to_string())
        );
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[ollama]\nmodel = \"llama3\"\n\n[agent]\nbackend = \"hf\"\nmax_tokens = 42\n"
        )
        .unwrap();

        let config = AgentConfig::load_from_path(Some(&path)).unwrap();

        assert_eq!(config.ollama.model, "llama3");
        assert_eq!(config.ollama.base_url, "http://127.0.0.1:11434");
        assert_eq!(config.agent.backend, Backend::Hf);
        assert_eq!(config.agent.max_tokens, 42);
    }

    #[test]
    fn test_resolve_config_file_reports_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let resolved = AgentConfig::resolve_config_file(Some(&path)).unwrap();
        assert_eq!(resolved, Some(path));
    }

    #[test]
    fn test_missing_explicit_config_file_is_an_error() {
        let result = AgentConfig::load_from_path(Some(Path::new("/nonexistent/weather-agent.toml")));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Config file not found"));
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = AgentConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("weather-agent"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
