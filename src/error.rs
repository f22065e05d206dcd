//! Error types and handling for the weather agent

use thiserror::Error;

/// Main error type for the weather agent
#[derive(Error, Debug)]
pub enum AgentError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Transport-level failures talking to an inference endpoint
    #[error("Network error: {message}")]
    Network { message: String },

    /// Non-2xx HTTP response from an inference endpoint
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The endpoint answered but the payload was unusable
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl AgentError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new HTTP status error
    pub fn http<S: Into<String>>(status: u16, body: S) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Create a new invalid-response error
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// True for 401/403 answers from the endpoint
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AgentError::Http { status: 401 | 403, .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AgentError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            AgentError::Network { .. } => {
                "Unable to reach the inference endpoint. Is the server running?".to_string()
            }
            AgentError::Http { .. } if self.is_auth_failure() => {
                "Authentication failed. Make sure you have a valid HF_TOKEN.".to_string()
            }
            AgentError::Http { status, .. } => {
                format!("The inference endpoint returned HTTP {status}.")
            }
            AgentError::InvalidResponse { message } => {
                format!("The model returned an unusable response: {message}")
            }
            AgentError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
