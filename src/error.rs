//! Error types for Backlog API operations.

use thiserror::Error;

/// Errors that can occur during Backlog API operations.
#[derive(Debug, Error)]
pub enum BacklogError {
    /// Configuration is missing or incomplete.
    #[error("Backlog configuration required: {0}")]
    ConfigMissing(String),

    /// A remote entity failed a client-side validity check.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Malformed entity identifier.
    #[error("invalid id '{0}': expected a numeric id")]
    InvalidId(String),

    /// API request failed.
    #[error("Backlog API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Rate limited (HTTP 429).
    #[error("Too Many Requests: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },
}

impl BacklogError {
    /// Whether this error represents a rate-limit rejection.
    ///
    /// Matches the dedicated [`BacklogError::RateLimited`] variant as well as
    /// any error whose rendered message carries the "Too Many Requests"
    /// signature, since some deployments report the condition only through
    /// the error body.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, BacklogError::RateLimited { .. })
            || self.to_string().contains("Too Many Requests")
    }
}

/// Result type alias for Backlog operations.
pub type Result<T> = core::result::Result<T, BacklogError>;
