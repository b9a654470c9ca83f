//! Shared fixtures for unit tests

use crate::series::{HistoricalSeries, TickerEntry};
use advisor_llm::{
    CompletionRequest, CompletionResponse, LLMProvider, Message, StopReason, TokenUsage,
};
use async_trait::async_trait;
use chrono::NaiveDate;

mockall::mock! {
    pub Provider {}

    #[async_trait]
    impl LLMProvider for Provider {
        async fn complete(&self, request: CompletionRequest) -> advisor_llm::Result<CompletionResponse>;
        fn name(&self) -> &str;
    }
}

pub fn day(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
}

pub fn entry(date: &str, close: f64) -> TickerEntry {
    TickerEntry::new(day(date), close - 1.0, close, close + 1.0, close - 2.0, 1000)
}

/// Two days, second close higher, delivered newest first
pub fn rising_series(ticker: &str) -> HistoricalSeries {
    HistoricalSeries::new(
        ticker,
        vec![entry("2025-03-19", 110.0), entry("2025-03-18", 100.0)],
    )
}

pub fn completion(text: &str) -> CompletionResponse {
    CompletionResponse {
        message: Message::assistant(text),
        stop_reason: StopReason::EndTurn,
        usage: TokenUsage::default(),
    }
}
