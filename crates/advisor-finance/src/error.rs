//! Error types for the analysis pipeline

use advisor_llm::LLMError;
use std::fmt;
use thiserror::Error;

/// Remote service an [`UpstreamError`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// End-of-day market-data service
    MarketData,
    /// LLM completion service
    Llm,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MarketData => f.write_str("Market data service"),
            Self::Llm => f.write_str("LLM service"),
        }
    }
}

/// Failure reported by, or while talking to, a remote service
///
/// `payload` keeps the raw response body when the service sent one.
#[derive(Debug, Error)]
#[error("{service} error: {message}")]
pub struct UpstreamError {
    /// Which service failed
    pub service: Service,
    /// HTTP status, when a response was received
    pub status: Option<u16>,
    /// Human-readable description
    pub message: String,
    /// Raw diagnostic body from the service
    pub payload: Option<String>,
}

impl UpstreamError {
    /// Create an error without status or payload
    pub fn new(service: Service, message: impl Into<String>) -> Self {
        Self {
            service,
            status: None,
            message: message.into(),
            payload: None,
        }
    }

    /// Attach the HTTP status
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the raw response body
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }
}

impl From<LLMError> for UpstreamError {
    fn from(err: LLMError) -> Self {
        Self {
            service: Service::Llm,
            status: err.status(),
            message: err.to_string(),
            payload: err.body().map(str::to_string),
        }
    }
}

/// Errors produced by the analysis pipeline
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Company name has no configured ticker
    #[error("Ticker not found for company name: {0}")]
    NotFound(String),

    /// Local precondition violated
    #[error("{0}")]
    InvalidInput(String),

    /// Market-data or LLM service failure
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Configuration value could not be interpreted
    #[error("Configuration error: {0}")]
    Config(String),

    /// Prompt template failed to render
    #[error("Prompt rendering failed: {0}")]
    Prompt(#[from] minijinja::Error),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

impl From<LLMError> for AdvisorError {
    fn from(err: LLMError) -> Self {
        Self::Upstream(err.into())
    }
}

/// Convert AdvisorError to advisor_core::Error
impl From<AdvisorError> for advisor_core::Error {
    fn from(err: AdvisorError) -> Self {
        advisor_core::Error::CapabilityFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AdvisorError::NotFound("Unknown Co".to_string());
        assert_eq!(err.to_string(), "Ticker not found for company name: Unknown Co");

        let err = AdvisorError::InvalidInput("No historical data provided.".to_string());
        assert_eq!(err.to_string(), "No historical data provided.");
    }

    #[test]
    fn test_upstream_display_and_payload() {
        let err: AdvisorError = UpstreamError::new(Service::MarketData, "HTTP 401: invalid key")
            .with_status(401)
            .with_payload(r#"{"error":{"code":"invalid_access_key"}}"#)
            .into();

        assert_eq!(err.to_string(), "Market data service error: HTTP 401: invalid key");
        match err {
            AdvisorError::Upstream(upstream) => {
                assert_eq!(upstream.status, Some(401));
                assert!(upstream.payload.unwrap().contains("invalid_access_key"));
            }
            other => panic!("Expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn test_llm_error_becomes_upstream() {
        let err: AdvisorError = LLMError::RateLimitExceeded {
            body: "retry later".to_string(),
        }
        .into();
        match err {
            AdvisorError::Upstream(upstream) => {
                assert_eq!(upstream.service, Service::Llm);
                assert_eq!(upstream.status, Some(429));
                assert_eq!(upstream.payload.as_deref(), Some("retry later"));
                assert!(upstream.message.contains("Rate limit"));
            }
            other => panic!("Expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn test_llm_status_and_raw_body_survive_conversion() {
        let body = r#"{"error":"overloaded"}"#;
        let err: AdvisorError = LLMError::from_status(503, body.to_string(), "dep").into();
        match err {
            AdvisorError::Upstream(upstream) => {
                assert_eq!(upstream.status, Some(503));
                assert_eq!(upstream.payload.as_deref(), Some(body));
            }
            other => panic!("Expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn test_llm_transport_error_has_no_status() {
        let upstream: UpstreamError =
            LLMError::ConfigurationError("Invalid Azure OpenAI endpoint ''".to_string()).into();
        assert_eq!(upstream.status, None);
        assert_eq!(upstream.payload, None);
    }

    #[test]
    fn test_error_conversion() {
        let core_err: advisor_core::Error = AdvisorError::NotFound("X".to_string()).into();
        match core_err {
            advisor_core::Error::CapabilityFailed(msg) => assert!(msg.contains("X")),
            other => panic!("Expected CapabilityFailed, got {other:?}"),
        }
    }
}
