//! Market-data service clients

pub mod marketstack;

pub use marketstack::MarketstackClient;

use crate::error::Result;
use crate::series::HistoricalSeries;
use async_trait::async_trait;

/// Source of end-of-day history for a ticker
///
/// Dates are ISO `YYYY-MM-DD` strings passed through unvalidated.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch entries for `ticker` between `from` and `to` inclusive
    async fn fetch_series(&self, ticker: &str, from: &str, to: &str) -> Result<HistoricalSeries>;
}
