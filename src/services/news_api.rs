use actix_web::http::StatusCode;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when querying the news search API
#[derive(Debug, Error)]
pub enum NewsApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl NewsApiError {
    /// HTTP status to report to our own caller
    ///
    /// Upstream 4xx/5xx codes are passed through; everything else is a
    /// bad gateway.
    pub fn status_code(&self) -> StatusCode {
        match self {
            NewsApiError::ApiError { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|code| code.is_client_error() || code.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            NewsApiError::RequestError(_) | NewsApiError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// NewsAPI client
///
/// Wraps the `/everything` search endpoint. One call per request, no retries.
pub struct NewsApiClient {
    base_url: String,
    api_key: String,
    language: String,
    client: Client,
}

impl NewsApiClient {
    /// Create a new NewsAPI client
    ///
    /// When `timeout` is `None` the HTTP client's default applies.
    pub fn new(
        base_url: String,
        api_key: String,
        language: String,
        timeout: Option<Duration>,
    ) -> Result<Self, NewsApiError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build()?;

        Ok(Self {
            base_url,
            api_key,
            language,
            client,
        })
    }

    /// Search all articles mentioning `query`
    ///
    /// Returns the upstream JSON body verbatim.
    pub async fn search_everything(
        &self,
        query: &str,
        page_size: u8,
    ) -> Result<Value, NewsApiError> {
        let url = format!(
            "{}/everything?q={}&language={}&pageSize={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(query),
            urlencoding::encode(&self.language),
            page_size
        );

        // Logged before the key is appended
        tracing::debug!("Fetching articles from: {}", url);

        // reqwest errors carry the request URL, which holds the key
        let response = self
            .client
            .get(format!("{}&apiKey={}", url, urlencoding::encode(&self.api_key)))
            .send()
            .await
            .map_err(|e| NewsApiError::RequestError(e.without_url()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| NewsApiError::RequestError(e.without_url()))?;

        if !status.is_success() {
            let message = upstream_error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
            tracing::error!("News API returned {} for {}: {}", status, query, message);
            return Err(NewsApiError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body)
            .map_err(|e| NewsApiError::InvalidResponse(format!("Failed to parse response body: {}", e)))
    }
}

/// Extract the `message` field NewsAPI puts in its error bodies
fn upstream_error_message(body: &[u8]) -> Option<String> {
    let json: Value = serde_json::from_slice(body).ok()?;
    json.get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}
