//! Analysis result types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional signal derived from the price series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendSignal {
    Buy,
    Sell,
    Neutral,
}

impl TrendSignal {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for TrendSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form commentary returned by the LLM, trimmed but otherwise verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Insight(String);

impl Insight {
    /// Wrap LLM output, trimming surrounding whitespace
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the text as JSON, if it is JSON
    ///
    /// The model is asked for JSON but nothing enforces it.
    pub fn structured(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.0).ok()
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trend and insight for one company over one date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub trend: TrendSignal,
    pub insight: Insight,
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trend: {}, Insight: {}", self.trend, self.insight)
    }
}

/// Either a result or the description of why the analysis failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Completed(AnalysisResult),
    Failed(String),
}

impl AnalysisOutcome {
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Completed(result) => Some(result),
            Self::Failed(_) => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

impl fmt::Display for AnalysisOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed(result) => result.fmt(f),
            Self::Failed(message) => write!(f, "Error analyzing financial data: {message}"),
        }
    }
}
