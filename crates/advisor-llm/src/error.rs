//! Error types for LLM operations

use thiserror::Error;

/// Result type for LLM operations
pub type Result<T> = std::result::Result<T, LLMError>;

/// Errors that can occur during LLM operations
///
/// Variants produced from an HTTP status keep the status and the raw response
/// body so callers can surface the service's own diagnostic.
#[derive(Error, Debug)]
pub enum LLMError {
    /// API request failed with an unexpected status
    #[error("API request failed: HTTP {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// Invalid API key or authentication failed
    #[error("Authentication failed: {body}")]
    AuthenticationFailed { status: u16, body: String },

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {body}")]
    RateLimitExceeded { body: String },

    /// Invalid request
    #[error("Invalid request: {body}")]
    InvalidRequest { body: String },

    /// Deployment (model) not found
    #[error("Deployment not found: {deployment}: {body}")]
    DeploymentNotFound { deployment: String, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Unexpected response format
    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl LLMError {
    /// Map a non-success HTTP status and its body to an error
    pub fn from_status(status: u16, body: String, deployment: &str) -> Self {
        match status {
            401 | 403 => Self::AuthenticationFailed { status, body },
            429 => Self::RateLimitExceeded { body },
            400 => Self::InvalidRequest { body },
            404 => Self::DeploymentNotFound {
                deployment: deployment.to_string(),
                body,
            },
            _ => Self::RequestFailed { status, body },
        }
    }

    /// HTTP status the service answered with, if the error came from one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } | Self::AuthenticationFailed { status, .. } => {
                Some(*status)
            }
            Self::RateLimitExceeded { .. } => Some(429),
            Self::InvalidRequest { .. } => Some(400),
            Self::DeploymentNotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// Raw response body, if the error came from an HTTP status
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::RequestFailed { body, .. }
            | Self::AuthenticationFailed { body, .. }
            | Self::RateLimitExceeded { body }
            | Self::InvalidRequest { body }
            | Self::DeploymentNotFound { body, .. } => Some(body),
            _ => None,
        }
    }
}
