//! HTTP client for the pollution-monitoring API.
//!
//! All endpoints speak JSON over a single configurable base URL. The client
//! is synchronous (`ureq`) and is shared across fetch worker threads; each
//! call performs exactly one request with a per-request timeout. There are
//! no retries — a failed call is reported once and the user re-triggers the
//! action.

mod types;

pub use types::*;

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error type for API requests.
///
/// Every variant is terminal for the request that produced it; the TUI
/// renders the message in the owning panel and nothing is propagated
/// further.
#[derive(Debug)]
pub enum ApiError {
    /// Connection failure, DNS failure, or timeout.
    Transport(String),
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The body was not JSON or did not match the documented shape.
    Decode(String),
    /// User-supplied filter text is not valid JSON. No request was issued.
    BadFilter(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "request failed: {}", msg),
            ApiError::Status(code) => write!(f, "server returned HTTP {}", code),
            ApiError::Decode(msg) => write!(f, "unexpected response: {}", msg),
            ApiError::BadFilter(msg) => write!(f, "invalid filter JSON: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => ApiError::Status(code),
            ureq::Error::Transport(t) => ApiError::Transport(t.to_string()),
        }
    }
}

/// Synchronous client for the monitoring API.
///
/// Cheap to construct; holds only the base URL and timeout. One instance is
/// created at startup and shared behind an `Arc` by all fetch workers.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Creates a client for `base_url` with the given per-request timeout.
    /// A trailing slash on the base URL is stripped.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// The configured base URL, as shown in error hints.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /` — liveness probe. Any 2xx answer counts as online.
    pub fn liveness(&self) -> Result<(), ApiError> {
        let url = format!("{}/", self.base_url);
        debug!("GET {}", url);
        ureq::get(&url).timeout(self.timeout).call()?;
        Ok(())
    }

    /// `GET /health`.
    pub fn health(&self) -> Result<HealthInfo, ApiError> {
        self.get_json("/health")
    }

    /// `GET /api/pollution/current-status`.
    pub fn current_status(&self) -> Result<CurrentStatus, ApiError> {
        self.get_json("/api/pollution/current-status")
    }

    /// `GET /api/pollution/alerts`.
    pub fn alerts(&self) -> Result<AlertList, ApiError> {
        self.get_json("/api/pollution/alerts")
    }

    /// `GET /api/pollution/analyze?days=N`.
    pub fn analyze(&self, days: u32) -> Result<AnalysisReport, ApiError> {
        self.get_json(&format!("/api/pollution/analyze?days={}", days))
    }

    /// `POST /api/pollution/recommendations`.
    pub fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Recommendations, ApiError> {
        self.post_json("/api/pollution/recommendations", request)
    }

    /// `POST /api/pollution/smart-recommendations`.
    pub fn smart_recommendations(&self, request: &SmartRequest) -> Result<SmartAdvice, ApiError> {
        self.post_json("/api/pollution/smart-recommendations", request)
    }

    /// `GET /api/data/sheets/info` — shape is not documented; returned
    /// verbatim for pretty-printing.
    pub fn sheets_info(&self) -> Result<Value, ApiError> {
        self.get_json("/api/data/sheets/info")
    }

    /// `GET /api/data/sheets/data?limit=N`.
    pub fn sheets_data(&self, limit: Option<u32>) -> Result<SheetRows, ApiError> {
        match limit {
            Some(n) => self.get_json(&format!("/api/data/sheets/data?limit={}", n)),
            None => self.get_json("/api/data/sheets/data"),
        }
    }

    /// `POST /api/data/sheets/query` — the body is the user's filter,
    /// forwarded as-is; the response shape is not documented.
    pub fn sheets_query(&self, filter: &Value) -> Result<Value, ApiError> {
        self.post_json("/api/data/sheets/query", filter)
    }

    /// `GET /api/ai/rag/stats`.
    pub fn rag_stats(&self) -> Result<RagStats, ApiError> {
        self.get_json("/api/ai/rag/stats")
    }

    /// `POST /api/ai/rag/query`.
    pub fn rag_query(&self, request: &RagRequest) -> Result<RagAnswer, ApiError> {
        self.post_json("/api/ai/rag/query", request)
    }

    /// `POST /api/ai/rag/reindex` — empty body.
    pub fn rag_reindex(&self) -> Result<ReindexReport, ApiError> {
        let url = format!("{}/api/ai/rag/reindex", self.base_url);
        debug!("POST {}", url);
        let resp = ureq::post(&url).timeout(self.timeout).call()?;
        resp.into_json().map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);
        let resp = ureq::get(&url).timeout(self.timeout).call()?;
        resp.into_json().map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);
        let resp = ureq::post(&url).timeout(self.timeout).send_json(body)?;
        resp.into_json().map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:8000/", Duration::from_secs(1));
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn error_messages_name_the_failure() {
        assert_eq!(
            ApiError::Status(503).to_string(),
            "server returned HTTP 503"
        );
        assert!(
            ApiError::BadFilter("expected value at line 1".into())
                .to_string()
                .starts_with("invalid filter JSON")
        );
    }
}
