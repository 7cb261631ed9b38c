//! Backlog API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Higher-level operations are implemented via traits on entity types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::Serialize;
use url::Url;

use crate::error::{BacklogError, Result};
use crate::retry::RetryPolicy;

const USER_AGENT: &str = concat!("backlogapi/", env!("CARGO_PKG_VERSION"));

/// Low-level Backlog API client.
///
/// Handles authentication and HTTP requests. Entity-specific operations
/// are implemented via the `Get`, `List`, and `Update` traits on model types.
///
/// Backlog authenticates with an `apiKey` query parameter, which this client
/// appends to every request. The client also carries the [`RetryPolicy`]
/// applied by the rate-limit-sensitive single-item operations.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use backlogapi::BacklogClient;
///
/// # fn example() -> backlogapi::Result<()> {
/// // Create from environment variables
/// let client = BacklogClient::from_env()?;
///
/// // Or configure manually
/// let client = BacklogClient::new("your-api-key", "https://example.backlog.jp/api/v2")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BacklogClient {
    http: Client,
    base_url: Arc<Url>,
    api_key: String,
    retry: RetryPolicy,
}

impl std::fmt::Debug for BacklogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BacklogClient")
            .field("base_url", &self.base_url.as_str())
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl BacklogClient {
    /// Create a client from environment variables.
    ///
    /// Uses `BACKLOG_API_KEY` for authentication and `BACKLOG_HOST` for the
    /// space host (e.g. `example.backlog.jp`); the base URL becomes
    /// `https://{host}/api/v2/`.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("BACKLOG_API_KEY").map_err(|_| {
            BacklogError::ConfigMissing("BACKLOG_API_KEY environment variable not set".to_string())
        })?;

        let host = env::var("BACKLOG_HOST").map_err(|_| {
            BacklogError::ConfigMissing("BACKLOG_HOST environment variable not set".to_string())
        })?;

        Self::new(&api_key, &format!("https://{host}/api/v2"))
    }

    /// Create a new client with the provided API key and base URL.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Backlog API key
    /// * `base_url` - Base URL for the Backlog API
    ///   (e.g., `https://example.backlog.jp/api/v2`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(BacklogError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            api_key: api_key.to_string(),
            retry: RetryPolicy::default(),
        })
    }

    /// Replace the retry policy used by rate-limit-sensitive operations.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the retry policy applied to single-item operations.
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await
            .map_err(BacklogError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a GET request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .query(&[("apiKey", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(BacklogError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a PATCH request with a form-encoded body.
    ///
    /// Backlog update endpoints consume `application/x-www-form-urlencoded`
    /// parameters rather than JSON.
    #[tracing::instrument(skip(self, body))]
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .patch(url)
            .query(&[("apiKey", self.api_key.as_str())])
            .form(body)
            .send()
            .await
            .map_err(BacklogError::HttpError)?;

        Self::check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        // Handle rate limiting
        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            tracing::warn!(?retry_after, "request rejected by rate limiter");
            return Err(BacklogError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let message = Self::extract_error_message(response, status).await;
        tracing::warn!(status = %status, message = %message, "request failed");
        Err(BacklogError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    ///
    /// Backlog wraps failures in an error envelope:
    /// `{"errors": [{"message": "...", "code": 6, "moreInfo": ""}]}`.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = json
                .get("errors")
                .and_then(|e| e.get(0))
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
            {
                return msg.to_string();
            }
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
        }

        if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body
        }
    }
}
