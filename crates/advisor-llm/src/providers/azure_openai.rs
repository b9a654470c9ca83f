//! Azure OpenAI provider implementation
//!
//! This module implements the LLMProvider trait for chat completions served
//! by an Azure OpenAI resource. The request's `model` is the deployment name:
//!
//! `POST {endpoint}/openai/deployments/{deployment}/chat/completions?api-version={version}`
//!
//! # Example
//!
//! ```no_run
//! use advisor_llm::{CompletionRequest, LLMProvider, Message};
//! use advisor_llm::providers::{AzureOpenAIConfig, AzureOpenAIProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AzureOpenAIConfig::new(
//!         "https://my-resource.openai.azure.com",
//!         "azure-key",
//!         "2024-02-01",
//!     );
//!     let provider = AzureOpenAIProvider::with_config(config)?;
//!
//!     let request = CompletionRequest::builder("gpt-4o")
//!         .system("You are a financial advisor analyzing historical stock data.")
//!         .add_message(Message::user("Hello!"))
//!         .max_tokens(100)
//!         .build();
//!
//!     let response = provider.complete(request).await?;
//!     println!("{}", response.text());
//!     Ok(())
//! }
//! ```

use crate::{
    CompletionRequest, CompletionResponse, LLMError, LLMProvider, Message, Result, Role,
    StopReason, TokenUsage,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// Configuration for the Azure OpenAI provider
#[derive(Clone, Default)]
pub struct AzureOpenAIConfig {
    /// Resource endpoint, e.g. "https://my-resource.openai.azure.com"
    pub endpoint: String,

    /// API key sent in the `api-key` header
    pub api_key: String,

    /// Value of the `api-version` query parameter
    pub api_version: String,

    /// Request timeout; `None` leaves requests unbounded
    pub timeout: Option<Duration>,
}

impl AzureOpenAIConfig {
    /// Create a new config without a request timeout
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            api_version: api_version.into(),
            timeout: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl fmt::Debug for AzureOpenAIConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AzureOpenAIConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Azure OpenAI chat-completions provider
pub struct AzureOpenAIProvider {
    client: Client,
    config: AzureOpenAIConfig,
}

impl AzureOpenAIProvider {
    /// Create a new provider with custom configuration
    ///
    /// Nothing is validated here: a missing endpoint or key surfaces on the
    /// first request.
    pub fn with_config(config: AzureOpenAIConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &AzureOpenAIConfig {
        &self.config
    }

    /// Build the chat-completions URL for a deployment
    fn completions_url(&self, deployment: &str) -> Result<Url> {
        let mut url = Url::parse(&self.config.endpoint).map_err(|e| {
            LLMError::ConfigurationError(format!(
                "Invalid Azure OpenAI endpoint '{}': {e}",
                self.config.endpoint
            ))
        })?;

        url.path_segments_mut()
            .map_err(|()| {
                LLMError::ConfigurationError(format!(
                    "Azure OpenAI endpoint '{}' cannot carry a path",
                    self.config.endpoint
                ))
            })?
            .pop_if_empty()
            .extend(["openai", "deployments", deployment, "chat", "completions"]);

        url.query_pairs_mut()
            .append_pair("api-version", &self.config.api_version);

        Ok(url)
    }
}

#[async_trait]
impl LLMProvider for AzureOpenAIProvider {
    #[instrument(skip(self, request), fields(deployment = %request.model))]
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let url = self.completions_url(&request.model)?;
        debug!("Sending chat completion request to {}", url.path());

        let body = ChatRequest {
            messages: build_chat_messages(request.system.as_deref(), &request.messages),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(url)
            .header("api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| error!("Azure OpenAI request failed: {e}"))?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!(status = status.as_u16(), body = %text, "Azure OpenAI API error");
            return Err(LLMError::from_status(status.as_u16(), text, &request.model));
        }

        let completion = parse_chat_response(&text)?;

        debug!(
            "Received response - stop_reason: {:?}, tokens: {}/{}",
            completion.stop_reason, completion.usage.input_tokens, completion.usage.output_tokens
        );

        Ok(completion)
    }

    fn name(&self) -> &'static str {
        "azure-openai"
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    max_tokens: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: usize,
    completion_tokens: usize,
}

// ============================================================================
// Conversion functions
// ============================================================================

/// System prompt first, then the conversation in order
fn build_chat_messages<'a>(system: Option<&'a str>, messages: &'a [Message]) -> Vec<ChatMessage<'a>> {
    system
        .map(|content| ChatMessage {
            role: Role::System.as_str(),
            content,
        })
        .into_iter()
        .chain(messages.iter().map(|m| ChatMessage {
            role: m.role.as_str(),
            content: &m.content,
        }))
        .collect()
}

/// Parse a success body; only the first choice is used
fn parse_chat_response(body: &str) -> Result<CompletionResponse> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| LLMError::UnexpectedResponse(format!("Failed to parse response: {e}")))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LLMError::UnexpectedResponse("No choices in response".to_string()))?;

    let stop_reason = choice
        .finish_reason
        .as_deref()
        .map_or(StopReason::EndTurn, map_stop_reason);

    let content = choice.message.content.ok_or_else(|| {
        LLMError::UnexpectedResponse(match stop_reason {
            StopReason::ContentFilter => "Completion withheld by content filter".to_string(),
            _ => "Completion has no message content".to_string(),
        })
    })?;

    let usage = response.usage.map_or_else(TokenUsage::default, |u| TokenUsage {
        input_tokens: u.prompt_tokens,
        output_tokens: u.completion_tokens,
    });

    Ok(CompletionResponse {
        message: Message::assistant(content),
        stop_reason,
        usage,
    })
}

fn map_stop_reason(reason: &str) -> StopReason {
    match reason {
        "length" => StopReason::MaxTokens,
        "content_filter" => StopReason::ContentFilter,
        "stop" => StopReason::EndTurn,
        other => {
            debug!("Unknown stop reason: {}", other);
            StopReason::EndTurn
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
