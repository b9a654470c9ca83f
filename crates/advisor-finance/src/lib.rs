//! Financial analysis pipeline for the advisor agent
//!
//! Given a company display name and an inclusive date range, the pipeline:
//!
//! 1. resolves the name to a ticker through a fixed [`SymbolMap`],
//! 2. fetches the end-of-day OHLCV history from the market-data service,
//! 3. classifies a `buy`/`sell`/`neutral` [`TrendSignal`] from the two
//!    earliest entries,
//! 4. asks an LLM deployment for a short justification of a position,
//!
//! and combines trend and insight into an [`AnalysisResult`]. The
//! [`FinancialAnalyst`] is the single point that turns stage failures into a
//! user-facing description.
//!
//! # Example
//!
//! ```rust,no_run
//! use advisor_finance::{AdvisorConfig, FinancialAnalyst};
//!
//! #[tokio::main]
//! async fn main() -> advisor_finance::Result<()> {
//!     let config = AdvisorConfig::from_env()?;
//!     let analyst = FinancialAnalyst::from_config(&config)?;
//!
//!     let outcome = analyst
//!         .analyze("Microsoft Corporation", "2025-03-18", "2025-03-19")
//!         .await;
//!     println!("{outcome}");
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod capabilities;
pub mod config;
pub mod engine;
pub mod error;
pub mod prompts;
pub mod series;
pub mod symbols;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main types for convenience
pub use api::{MarketDataSource, MarketstackClient};
pub use capabilities::build_agent;
pub use config::AdvisorConfig;
pub use engine::{
    AnalysisOutcome, AnalysisResult, FinancialAnalyst, Insight, InsightGenerator, TrendSignal,
    classify,
};
pub use error::{AdvisorError, Result, Service, UpstreamError};
pub use series::{HistoricalSeries, TickerEntry};
pub use symbols::SymbolMap;
