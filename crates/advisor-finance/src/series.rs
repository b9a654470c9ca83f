//! End-of-day OHLCV data model

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One end-of-day record
///
/// The service reports `null` for values it does not have; such records are
/// kept rather than failing the whole series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerEntry {
    /// Trading day; timestamps from the wire keep only their calendar date
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    /// Traded volume; accepted as integer or float
    #[serde(default, deserialize_with = "deserialize_volume")]
    pub volume: Option<u64>,
}

impl TickerEntry {
    /// Create an entry with every value present
    pub fn new(date: NaiveDate, open: f64, close: f64, high: f64, low: f64, volume: u64) -> Self {
        Self {
            date,
            open: Some(open),
            close: Some(close),
            high: Some(high),
            low: Some(low),
            volume: Some(volume),
        }
    }
}

/// Entries for one ticker, in the order the service returned them
///
/// Arrival order is not guaranteed; consumers sort with [`HistoricalSeries::sorted`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    pub ticker: String,
    pub entries: Vec<TickerEntry>,
}

impl HistoricalSeries {
    /// Create a series
    pub fn new(ticker: impl Into<String>, entries: Vec<TickerEntry>) -> Self {
        Self {
            ticker: ticker.into(),
            entries,
        }
    }

    /// Entries ordered by date ascending; ties keep arrival order
    pub fn sorted(&self) -> Vec<&TickerEntry> {
        let mut sorted: Vec<&TickerEntry> = self.entries.iter().collect();
        sorted.sort_by_key(|entry| entry.date);
        sorted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse the leading `YYYY-MM-DD` of a date or timestamp string
///
/// Accepts `2025-03-18`, `2025-03-18T00:00:00+0000` and `2025-03-18 00:00:00`.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
}

fn deserialize_volume<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_finite() && raw >= 0.0 => Ok(Some(raw.round() as u64)),
        Some(raw) => Err(serde::de::Error::custom(format!("invalid volume: {raw}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_calendar_date() {
        assert_eq!(parse_calendar_date("2025-03-18"), Some(day("2025-03-18")));
        assert_eq!(
            parse_calendar_date("2025-03-18T00:00:00+0000"),
            Some(day("2025-03-18"))
        );
        assert_eq!(parse_calendar_date("2025-03-18 16:00:00"), Some(day("2025-03-18")));
        assert_eq!(parse_calendar_date("18/03/2025"), None);
        assert_eq!(parse_calendar_date(""), None);
    }

    #[test]
    fn test_deserialize_marketstack_record() {
        let entry: TickerEntry = serde_json::from_value(json!({
            "open": 388.45,
            "high": 391.1,
            "low": 385.2,
            "close": 387.82,
            "volume": 20_453_100.0,
            "adj_close": 387.82,
            "symbol": "MSFT",
            "exchange": "XNAS",
            "date": "2025-03-18T00:00:00+0000"
        }))
        .unwrap();

        assert_eq!(entry.date, day("2025-03-18"));
        assert_eq!(entry.close, Some(387.82));
        assert_eq!(entry.volume, Some(20_453_100));
    }

    #[test]
    fn test_null_values_are_kept() {
        let entry: TickerEntry = serde_json::from_value(json!({
            "date": "2025-03-18", "open": null, "close": 2, "high": 3, "low": 1, "volume": null
        }))
        .unwrap();
        assert_eq!(entry.open, None);
        assert_eq!(entry.close, Some(2.0));
        assert_eq!(entry.volume, None);

        let entry: TickerEntry = serde_json::from_value(json!({ "date": "2025-03-18" })).unwrap();
        assert_eq!(entry.high, None);
    }

    #[test]
    fn test_rejects_negative_volume() {
        let result: Result<TickerEntry, _> = serde_json::from_value(json!({
            "date": "2025-03-18", "open": 1, "close": 1, "high": 1, "low": 1, "volume": -5
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_sorted_is_stable_and_ascending() {
        let series = HistoricalSeries::new(
            "MSFT",
            vec![
                TickerEntry::new(day("2025-03-19"), 0.0, 3.0, 0.0, 0.0, 0),
                TickerEntry::new(day("2025-03-18"), 0.0, 1.0, 0.0, 0.0, 0),
                TickerEntry::new(day("2025-03-18"), 0.0, 2.0, 0.0, 0.0, 0),
            ],
        );

        let closes: Vec<Option<f64>> = series.sorted().iter().map(|e| e.close).collect();
        assert_eq!(closes, vec![Some(1.0), Some(2.0), Some(3.0)]);
        // Original order untouched
        assert_eq!(series.entries[0].close, Some(3.0));
        assert_eq!(series.len(), 3);
    }
}
