//! The `analyzeFinancialData` capability

use crate::engine::FinancialAnalyst;
use advisor_core::{Capability, Result, parse_args};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeArgs {
    company_name: String,
    from_date: String,
    to_date: String,
}

/// Runs the analysis pipeline and answers with trend and insight
///
/// Pipeline failures are part of the answer text, not an error.
#[derive(Clone)]
pub struct AnalyzeFinancialData {
    analyst: FinancialAnalyst,
}

impl AnalyzeFinancialData {
    pub fn new(analyst: FinancialAnalyst) -> Self {
        Self { analyst }
    }
}

#[async_trait]
impl Capability for AnalyzeFinancialData {
    async fn run(&self, args: Value) -> Result<String> {
        let args: AnalyzeArgs = parse_args(self.name(), args)?;

        let outcome = self
            .analyst
            .analyze(&args.company_name, &args.from_date, &args.to_date)
            .await;
        Ok(outcome.to_string())
    }

    fn name(&self) -> &'static str {
        "analyzeFinancialData"
    }

    fn description(&self) -> &'static str {
        "Analyze financial data for a given company within a date range"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "companyName": {
                    "type": "string",
                    "description": "The name of the company"
                },
                "fromDate": {
                    "type": "string",
                    "description": "The start date in YYYY-MM-DD format"
                },
                "toDate": {
                    "type": "string",
                    "description": "The end date in YYYY-MM-DD format"
                }
            },
            "required": ["companyName", "fromDate", "toDate"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockMarketDataSource;
    use crate::engine::InsightGenerator;
    use crate::symbols::SymbolMap;
    use crate::test_support::{MockProvider, completion, rising_series};
    use advisor_core::Error;
    use std::sync::Arc;

    fn capability(market_data: MockMarketDataSource, provider: MockProvider) -> AnalyzeFinancialData {
        AnalyzeFinancialData::new(FinancialAnalyst::new(
            SymbolMap::builtin(),
            Arc::new(market_data),
            InsightGenerator::new(Arc::new(provider), "dep"),
        ))
    }

    #[tokio::test]
    async fn test_success_text() {
        let mut market_data = MockMarketDataSource::new();
        market_data
            .expect_fetch_series()
            .returning(|ticker, _, _| Ok(rising_series(ticker)));
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .returning(|_| Ok(completion("buy, strong volume")));

        let reply = capability(market_data, provider)
            .run(json!({
                "companyName": "Tesla Inc",
                "fromDate": "2025-03-18",
                "toDate": "2025-03-19"
            }))
            .await
            .unwrap();

        assert_eq!(reply, "Trend: buy, Insight: buy, strong volume");
    }

    #[tokio::test]
    async fn test_failure_text() {
        let reply = capability(MockMarketDataSource::new(), MockProvider::new())
            .run(json!({
                "companyName": "Unknown Co",
                "fromDate": "2025-01-01",
                "toDate": "2025-01-02"
            }))
            .await
            .unwrap();

        assert_eq!(
            reply,
            "Error analyzing financial data: Ticker not found for company name: Unknown Co"
        );
    }

    #[tokio::test]
    async fn test_snake_case_arguments_are_rejected() {
        let err = capability(MockMarketDataSource::new(), MockProvider::new())
            .run(json!({
                "company_name": "Tesla Inc",
                "from_date": "2025-03-18",
                "to_date": "2025-03-19"
            }))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidArguments { .. }));
    }
}
