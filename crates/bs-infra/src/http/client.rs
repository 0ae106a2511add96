//! HTTP transport for the catalog and summarization services.
//!
//! One outbound request per call. No retry, no caching, no request
//! coalescing; the client keeps no state besides the connection pool.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use bs_core::config::ApiConfig;
use bs_core::ports::{CatalogPort, SummarizerPort};
use bs_core::{
    BookDetail, BookId, CatalogPage, ServiceError, SummarizationRequest, SummarizationResult,
};

type HttpResult<T> = std::result::Result<T, ServiceError>;

const BOOKS_PATH: &str = "/api/books";
const SUMMARIZE_PATH: &str = "/api/summarize";

#[derive(Debug, Clone)]
pub struct HttpBookService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBookService {
    /// Build a transport for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> HttpResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::InvalidRequest(format!("failed to build HTTP client: {e}")))?;
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ApiConfig) -> HttpResult<Self> {
        Self::new(config.normalized_base_url(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute<T: DeserializeOwned>(&self, op: &str, request: RequestBuilder) -> HttpResult<T> {
        let response = request.send().await.map_err(|err| {
            let mapped = map_transport_error(&err);
            warn!(op, error = %err, "request failed before a response arrived");
            mapped
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    debug!(op, error = %err, "failed to read error response body");
                    String::new()
                }
            };
            let err = map_status(status, &body);
            warn!(op, status = status.as_u16(), error = %err, "request returned an error status");
            return Err(err);
        }

        let bytes = response.bytes().await.map_err(|err| {
            warn!(op, error = %err, "failed to read response body");
            map_transport_error(&err)
        })?;

        serde_json::from_slice(&bytes).map_err(|err| {
            warn!(op, error = %err, "failed to decode response body");
            ServiceError::Decode(err.to_string())
        })
    }
}

#[async_trait]
impl CatalogPort for HttpBookService {
    async fn fetch_catalog_page(&self, search_term: &str, page: u32) -> HttpResult<CatalogPage> {
        let url = self.endpoint(BOOKS_PATH);
        let mut query: Vec<(&str, String)> = Vec::with_capacity(2);
        // a blank term lists the whole catalog; anything else goes out verbatim
        if !search_term.trim().is_empty() {
            query.push(("search", search_term.to_string()));
        }
        query.push(("page", page.to_string()));

        debug!(%url, search = search_term, page, "fetching catalog page");
        self.execute("fetch_catalog_page", self.client.get(&url).query(&query))
            .await
    }

    async fn fetch_book_detail(&self, book_id: BookId) -> HttpResult<BookDetail> {
        let url = format!("{}/{}", self.endpoint(BOOKS_PATH), book_id);
        debug!(%url, %book_id, "fetching book detail");
        self.execute("fetch_book_detail", self.client.get(&url)).await
    }
}

#[async_trait]
impl SummarizerPort for HttpBookService {
    async fn request_summary(
        &self,
        request: &SummarizationRequest,
    ) -> HttpResult<SummarizationResult> {
        let url = self.endpoint(SUMMARIZE_PATH);
        debug!(
            %url,
            book_id = %request.book_id,
            page_number = %request.page_number,
            has_text_url = request.text_url.is_some(),
            "requesting summary"
        );
        self.execute("request_summary", self.client.post(&url).json(request))
            .await
    }
}

/// FastAPI-style error body: `{"detail": ...}`.
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(detail) => Some(detail),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn map_status(status: StatusCode, body: &str) -> ServiceError {
    ServiceError::from_status(status.as_u16(), extract_detail(body))
}

fn map_transport_error(error: &reqwest::Error) -> ServiceError {
    if let Some(status) = error.status() {
        return ServiceError::from_status(status.as_u16(), None);
    }
    if error.is_builder() {
        return ServiceError::InvalidRequest(error.to_string());
    }
    if error.is_decode() {
        return ServiceError::Decode(error.to_string());
    }
    // connect, timeout, and body/stream failures all mean no usable response
    let message = if error.is_timeout() {
        format!("request timed out: {error}")
    } else {
        error.to_string()
    };
    ServiceError::NetworkUnreachable { message }
}
