//! Loopback HTTP server with canned responses
//!
//! Every request receives the same status and JSON body. Requests are recorded
//! so tests can assert on the method, path, query string, headers and body
//! that a client actually sent.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::IntoResponse;
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request received by [`CannedServer`]
#[derive(Debug, Clone, Default)]
pub struct RecordedRequest {
    /// HTTP method, e.g. "GET"
    pub method: String,
    /// Path without the query string
    pub path: String,
    /// Decoded query pairs, in order
    pub query: Vec<(String, String)>,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body as text
    pub body: String,
}

impl RecordedRequest {
    /// First value of a query parameter
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First value of a header (name is case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Clone)]
struct CannedState {
    status: StatusCode,
    body: Arc<String>,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// HTTP server on 127.0.0.1 answering every request with one canned response
pub struct CannedServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl CannedServer {
    /// Bind an ephemeral port and start serving `status` with a JSON `body`
    pub async fn start(status: u16, body: impl Into<String>) -> io::Result<Self> {
        let status = StatusCode::from_u16(status)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new().fallback(respond).with_state(CannedState {
            status,
            body: Arc::new(body.into()),
            recorded: Arc::clone(&requests),
        });

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::warn!("Canned server stopped: {e}");
            }
        });

        Ok(Self {
            addr,
            requests,
            handle,
        })
    }

    /// Base URL of the server, without a trailing slash
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Drop for CannedServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn respond(
    State(state): State<CannedState>,
    method: Method,
    uri: Uri,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    state
        .recorded
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query,
            headers,
            body,
        });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.as_str().to_owned(),
    )
}
