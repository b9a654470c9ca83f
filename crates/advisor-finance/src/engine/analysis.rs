//! Orchestrates lookup, retrieval, classification and insight

use crate::api::{MarketDataSource, MarketstackClient};
use crate::config::AdvisorConfig;
use crate::engine::{AnalysisOutcome, AnalysisResult, InsightGenerator, classify};
use crate::error::Result;
use crate::symbols::SymbolMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Runs the analysis pipeline for a company over a date range
///
/// Holds no per-request state; one instance can serve concurrent calls.
#[derive(Clone)]
pub struct FinancialAnalyst {
    symbols: Arc<SymbolMap>,
    market_data: Arc<dyn MarketDataSource>,
    insights: InsightGenerator,
}

impl FinancialAnalyst {
    pub fn new(
        symbols: Arc<SymbolMap>,
        market_data: Arc<dyn MarketDataSource>,
        insights: InsightGenerator,
    ) -> Self {
        Self {
            symbols,
            market_data,
            insights,
        }
    }

    /// Built-in symbol table, Marketstack client and Azure OpenAI insight
    pub fn from_config(config: &AdvisorConfig) -> Result<Self> {
        Ok(Self::new(
            SymbolMap::builtin(),
            Arc::new(MarketstackClient::from_config(config)?),
            InsightGenerator::from_config(config)?,
        ))
    }

    /// Run the pipeline, returning the first stage error unchanged
    #[instrument(skip(self))]
    pub async fn try_analyze(
        &self,
        company_name: &str,
        from: &str,
        to: &str,
    ) -> Result<AnalysisResult> {
        let ticker = self.symbols.resolve(company_name)?;
        let series = self.market_data.fetch_series(ticker, from, to).await?;

        let trend = classify(&series);
        let insight = self.insights.generate(&series).await?;

        info!(ticker, %trend, "Analysis complete");
        Ok(AnalysisResult { trend, insight })
    }

    /// Run the pipeline; failures become a description instead of an error
    pub async fn analyze(&self, company_name: &str, from: &str, to: &str) -> AnalysisOutcome {
        match self.try_analyze(company_name, from, to).await {
            Ok(result) => AnalysisOutcome::Completed(result),
            Err(err) => {
                warn!(company = company_name, error = %err, "Analysis failed");
                AnalysisOutcome::Failed(err.to_string())
            }
        }
    }
}
