//! Configuration for the analysis pipeline

use crate::error::{AdvisorError, Result};
use std::fmt;
use std::time::Duration;

/// Market-data service base URL
pub const BASE_URL_VAR: &str = "BASE_URL";
/// Market-data service access key
pub const ACCESS_KEY_VAR: &str = "ACCESS_KEY";
/// LLM resource endpoint
pub const LLM_ENDPOINT_VAR: &str = "AZURE_OPENAI_ENDPOINT";
/// LLM deployment name
pub const LLM_DEPLOYMENT_VAR: &str = "AZURE_DEPLOYMENT_NAME";
/// LLM API key
pub const LLM_API_KEY_VAR: &str = "AZURE_API_KEY";
/// LLM API version
pub const LLM_API_VERSION_VAR: &str = "AZURE_API_VERSION";
/// Agent platform API key
pub const PLATFORM_API_KEY_VAR: &str = "OPENSERV_API_KEY";
/// Optional HTTP timeout in whole seconds
pub const REQUEST_TIMEOUT_VAR: &str = "REQUEST_TIMEOUT_SECS";

/// Settings for the market-data client, the LLM provider and the agent shell
///
/// Missing values are not rejected here; they surface as upstream failures
/// once a request is attempted.
#[derive(Clone, Default)]
pub struct AdvisorConfig {
    /// Base URL of the end-of-day market-data service
    pub market_data_base_url: String,

    /// Access key sent to the market-data service
    pub market_data_access_key: String,

    /// LLM resource endpoint
    pub llm_endpoint: String,

    /// LLM deployment name
    pub llm_deployment: String,

    /// LLM API key
    pub llm_api_key: String,

    /// LLM API version
    pub llm_api_version: String,

    /// Agent platform key, passed through untouched
    pub platform_api_key: Option<String>,

    /// HTTP timeout for both clients (`None` waits indefinitely)
    pub request_timeout: Option<Duration>,
}

impl AdvisorConfig {
    /// Create a new configuration builder
    pub fn builder() -> AdvisorConfigBuilder {
        AdvisorConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Blank values are treated as absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let request_timeout = get(REQUEST_TIMEOUT_VAR)
            .map(|raw| parse_timeout(&raw))
            .transpose()?;

        Ok(Self {
            market_data_base_url: get(BASE_URL_VAR).unwrap_or_default(),
            market_data_access_key: get(ACCESS_KEY_VAR).unwrap_or_default(),
            llm_endpoint: get(LLM_ENDPOINT_VAR).unwrap_or_default(),
            llm_deployment: get(LLM_DEPLOYMENT_VAR).unwrap_or_default(),
            llm_api_key: get(LLM_API_KEY_VAR).unwrap_or_default(),
            llm_api_version: get(LLM_API_VERSION_VAR).unwrap_or_default(),
            platform_api_key: get(PLATFORM_API_KEY_VAR),
            request_timeout,
        })
    }

    /// Names of the environment variables whose settings are empty
    ///
    /// Only used for diagnostics; an incomplete config is still usable.
    pub fn missing_settings(&self) -> Vec<&'static str> {
        [
            (BASE_URL_VAR, &self.market_data_base_url),
            (ACCESS_KEY_VAR, &self.market_data_access_key),
            (LLM_ENDPOINT_VAR, &self.llm_endpoint),
            (LLM_DEPLOYMENT_VAR, &self.llm_deployment),
            (LLM_API_KEY_VAR, &self.llm_api_key),
            (LLM_API_VERSION_VAR, &self.llm_api_version),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| {
            AdvisorError::Config(format!(
                "{REQUEST_TIMEOUT_VAR} must be a whole number of seconds, got '{raw}'"
            ))
        })
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "<redacted>" }
}

impl fmt::Debug for AdvisorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvisorConfig")
            .field("market_data_base_url", &self.market_data_base_url)
            .field("market_data_access_key", &redact(&self.market_data_access_key))
            .field("llm_endpoint", &self.llm_endpoint)
            .field("llm_deployment", &self.llm_deployment)
            .field("llm_api_key", &redact(&self.llm_api_key))
            .field("llm_api_version", &self.llm_api_version)
            .field(
                "platform_api_key",
                &self.platform_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Builder for AdvisorConfig
#[derive(Debug, Default)]
pub struct AdvisorConfigBuilder {
    config: AdvisorConfig,
}

impl AdvisorConfigBuilder {
    /// Set the market-data base URL and access key
    pub fn market_data(mut self, base_url: impl Into<String>, access_key: impl Into<String>) -> Self {
        self.config.market_data_base_url = base_url.into();
        self.config.market_data_access_key = access_key.into();
        self
    }

    /// Set the LLM endpoint
    pub fn llm_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.llm_endpoint = endpoint.into();
        self
    }

    /// Set the LLM deployment name
    pub fn llm_deployment(mut self, deployment: impl Into<String>) -> Self {
        self.config.llm_deployment = deployment.into();
        self
    }

    /// Set the LLM API key
    pub fn llm_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.llm_api_key = key.into();
        self
    }

    /// Set the LLM API version
    pub fn llm_api_version(mut self, version: impl Into<String>) -> Self {
        self.config.llm_api_version = version.into();
        self
    }

    /// Set the agent platform key
    pub fn platform_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.platform_api_key = Some(key.into());
        self
    }

    /// Set the HTTP timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = Some(timeout);
        self
    }

    /// Build the configuration
    pub fn build(self) -> AdvisorConfig {
        self.config
    }
}
