//! Analysis engine: trend classification, LLM insight and orchestration

pub mod analysis;
pub mod insight;
pub mod result;
pub mod trend;

pub use analysis::FinancialAnalyst;
pub use insight::{INSIGHT_MAX_TOKENS, INSIGHT_TEMPERATURE, InsightGenerator};
pub use result::{AnalysisOutcome, AnalysisResult, Insight, TrendSignal};
pub use trend::classify;
