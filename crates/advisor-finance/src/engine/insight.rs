//! LLM-backed commentary on a price series

use crate::config::AdvisorConfig;
use crate::engine::Insight;
use crate::error::{AdvisorError, Result};
use crate::prompts;
use crate::series::HistoricalSeries;
use advisor_llm::providers::{AzureOpenAIConfig, AzureOpenAIProvider};
use advisor_llm::{CompletionRequest, LLMProvider, Message};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Sampling temperature for insight requests
pub const INSIGHT_TEMPERATURE: f32 = 0.5;

/// Completion length limit for insight requests
pub const INSIGHT_MAX_TOKENS: usize = 500;

/// Asks an LLM deployment for a position and a short justification
#[derive(Clone)]
pub struct InsightGenerator {
    provider: Arc<dyn LLMProvider>,
    deployment: String,
}

impl InsightGenerator {
    /// Create a generator over any provider
    pub fn new(provider: Arc<dyn LLMProvider>, deployment: impl Into<String>) -> Self {
        Self {
            provider,
            deployment: deployment.into(),
        }
    }

    /// Create a generator backed by Azure OpenAI
    pub fn from_config(config: &AdvisorConfig) -> Result<Self> {
        let mut azure = AzureOpenAIConfig::new(
            config.llm_endpoint.clone(),
            config.llm_api_key.clone(),
            config.llm_api_version.clone(),
        );
        if let Some(timeout) = config.request_timeout {
            azure = azure.with_timeout(timeout);
        }
        let provider = AzureOpenAIProvider::with_config(azure)?;

        Ok(Self::new(Arc::new(provider), config.llm_deployment.clone()))
    }

    /// Produce commentary for the full series
    ///
    /// An empty series is rejected before anything is sent.
    #[instrument(skip(self, series), fields(ticker = %series.ticker, entries = series.len()))]
    pub async fn generate(&self, series: &HistoricalSeries) -> Result<Insight> {
        if series.is_empty() {
            return Err(AdvisorError::InvalidInput(
                "No historical data provided.".to_string(),
            ));
        }

        let prompt = prompts::insight_prompt(series.sorted())?;
        let request = CompletionRequest::builder(self.deployment.clone())
            .system(prompts::INSIGHT_SYSTEM_PROMPT)
            .add_message(Message::user(prompt))
            .temperature(INSIGHT_TEMPERATURE)
            .max_tokens(INSIGHT_MAX_TOKENS)
            .build();

        let response = self.provider.complete(request).await?;
        debug!(stop_reason = ?response.stop_reason, "Received insight");

        Ok(Insight::new(response.text()))
    }
}
