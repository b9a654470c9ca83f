//! Marketstack-style end-of-day API client

use crate::api::MarketDataSource;
use crate::config::AdvisorConfig;
use crate::error::{AdvisorError, Result, Service, UpstreamError};
use crate::series::{HistoricalSeries, TickerEntry};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, error, instrument};

/// Client for the `/eod` endpoint
///
/// One GET per call; no retries, no caching.
#[derive(Clone)]
pub struct MarketstackClient {
    client: Client,
    base_url: String,
    access_key: String,
}

#[derive(Debug, Deserialize)]
struct EodResponse {
    data: Vec<TickerEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl MarketstackClient {
    /// Create a client without a request timeout
    pub fn new(base_url: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            access_key: access_key.into(),
        }
    }

    /// Create a client using the market-data settings and timeout from config
    pub fn from_config(config: &AdvisorConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AdvisorError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.market_data_base_url.clone(),
            access_key: config.market_data_access_key.clone(),
        })
    }

    fn eod_url(&self) -> String {
        format!("{}/eod", self.base_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for MarketstackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarketstackClient")
            .field("base_url", &self.base_url)
            .field("access_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MarketDataSource for MarketstackClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_series(&self, ticker: &str, from: &str, to: &str) -> Result<HistoricalSeries> {
        debug!("Requesting end-of-day series");

        let response = self
            .client
            .get(self.eod_url())
            .query(&[
                ("access_key", self.access_key.as_str()),
                ("symbols", ticker),
                ("date_from", from),
                ("date_to", to),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            error!(status = status.as_u16(), payload = %body, "Market data request failed");
            return Err(UpstreamError::new(
                Service::MarketData,
                format!("HTTP {}: {}", status.as_u16(), describe_error(&body)),
            )
            .with_status(status.as_u16())
            .with_payload(body)
            .into());
        }

        let series = decode_eod_response(ticker, &body)?;
        debug!(entries = series.len(), "Received end-of-day series");
        Ok(series)
    }
}

/// Decode a successful `/eod` body into a series for `ticker`
pub fn decode_eod_response(ticker: &str, body: &str) -> Result<HistoricalSeries> {
    let decoded: EodResponse = serde_json::from_str(body).map_err(|e| {
        error!(error = %e, payload = %body, "Malformed market data response");
        UpstreamError::new(Service::MarketData, format!("Malformed response: {e}"))
            .with_payload(body)
    })?;
    Ok(HistoricalSeries::new(ticker, decoded.data))
}

// The request URL carries the access key, so it is stripped before reporting.
fn transport_error(err: reqwest::Error) -> AdvisorError {
    let err = err.without_url();
    error!(error = %err, "Market data transport failure");
    UpstreamError::new(Service::MarketData, format!("Request failed: {err}")).into()
}

fn describe_error(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "empty response".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_utils::testing::CannedServer;

    const EOD_BODY: &str = r#"{
        "pagination": {"limit": 100, "offset": 0, "count": 2, "total": 2},
        "data": [
            {"open": 110.0, "high": 112.0, "low": 108.0, "close": 110.0, "volume": 2000.0,
             "symbol": "MSFT", "exchange": "XNAS", "date": "2025-03-19T00:00:00+0000"},
            {"open": 99.0, "high": 101.0, "low": 98.0, "close": 100.0, "volume": 1000.0,
             "symbol": "MSFT", "exchange": "XNAS", "date": "2025-03-18T00:00:00+0000"}
        ]
    }"#;

    #[tokio::test]
    async fn test_fetch_series_sends_query_and_decodes() {
        let server = CannedServer::start(200, EOD_BODY).await.unwrap();
        let client = MarketstackClient::new(format!("{}/v1/", server.url()), "secret-key");

        let series = client
            .fetch_series("MSFT", "2025-03-18", "2025-03-19")
            .await
            .unwrap();

        assert_eq!(series.ticker, "MSFT");
        assert_eq!(series.len(), 2);
        // Arrival order is preserved
        assert_eq!(series.entries[0].volume, Some(2000));

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/v1/eod");
        assert_eq!(request.query_param("access_key"), Some("secret-key"));
        assert_eq!(request.query_param("symbols"), Some("MSFT"));
        assert_eq!(request.query_param("date_from"), Some("2025-03-18"));
        assert_eq!(request.query_param("date_to"), Some("2025-03-19"));
    }

    #[tokio::test]
    async fn test_non_success_preserves_payload() {
        let body = r#"{"error":{"code":"invalid_access_key","message":"You have not supplied a valid API Access Key."}}"#;
        let server = CannedServer::start(401, body).await.unwrap();
        let client = MarketstackClient::new(server.url(), "bad");

        let err = client
            .fetch_series("MSFT", "2025-03-18", "2025-03-19")
            .await
            .unwrap_err();

        match err {
            AdvisorError::Upstream(upstream) => {
                assert_eq!(upstream.service, Service::MarketData);
                assert_eq!(upstream.status, Some(401));
                assert_eq!(
                    upstream.message,
                    "HTTP 401: You have not supplied a valid API Access Key."
                );
                assert_eq!(upstream.payload.as_deref(), Some(body));
            }
            other => panic!("Expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_upstream_error() {
        let server = CannedServer::start(200, r#"{"unexpected": true}"#).await.unwrap();
        let client = MarketstackClient::new(server.url(), "key");

        let err = client.fetch_series("MSFT", "a", "b").await.unwrap_err();
        match err {
            AdvisorError::Upstream(upstream) => {
                assert!(upstream.message.starts_with("Malformed response"));
                assert_eq!(upstream.payload.as_deref(), Some(r#"{"unexpected": true}"#));
            }
            other => panic!("Expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_base_url_fails_at_request_construction() {
        let client = MarketstackClient::new("", "key");
        let err = client
            .fetch_series("MSFT", "2025-03-18", "2025-03-19")
            .await
            .unwrap_err();
        assert!(matches!(err, AdvisorError::Upstream(ref u) if u.service == Service::MarketData));
    }

    #[test]
    fn test_decode_keeps_records_with_nulls() {
        let series = decode_eod_response(
            "MSFT",
            r#"{"data":[{"date":"2025-03-18T00:00:00+0000","open":null,"close":100.0,"high":101.0,"low":99.0,"volume":null}]}"#,
        )
        .unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.entries[0].open, None);
    }

    #[test]
    fn test_decode_empty_data() {
        let series = decode_eod_response("AAPL", r#"{"data": []}"#).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.ticker, "AAPL");
    }

    #[test]
    fn test_debug_redacts_access_key() {
        let client = MarketstackClient::new("http://localhost", "very-secret");
        assert!(!format!("{client:?}").contains("very-secret"));
    }
}
