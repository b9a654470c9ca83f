//! Directional signal from the two earliest entries of a series

use crate::engine::TrendSignal;
use crate::series::HistoricalSeries;
use std::cmp::Ordering;
use tracing::warn;

/// Classify a series as buy, sell or neutral
///
/// Entries are ordered by date; only the closes of the earliest and
/// second-earliest entries are compared. Fewer than two entries, or a
/// missing close on either, is neutral.
pub fn classify(series: &HistoricalSeries) -> TrendSignal {
    let sorted = series.sorted();
    let [earliest, second, ..] = sorted.as_slice() else {
        warn!(
            ticker = %series.ticker,
            entries = sorted.len(),
            "Not enough data to analyze trend"
        );
        return TrendSignal::Neutral;
    };

    let (Some(latest), Some(prev)) = (second.close, earliest.close) else {
        warn!(ticker = %series.ticker, "Missing close price, trend is neutral");
        return TrendSignal::Neutral;
    };

    match latest.partial_cmp(&prev) {
        Some(Ordering::Greater) => TrendSignal::Buy,
        Some(Ordering::Less) => TrendSignal::Sell,
        Some(Ordering::Equal) | None => TrendSignal::Neutral,
    }
}
