//! Fixed-delay retry support for rate-limited calls.
//!
//! Backlog rejects bursts of requests with HTTP 429. The single-item
//! operations (issue and wiki get/update) are wrapped in [`with_retry`],
//! which re-attempts rate-limited calls after a constant pause. Any other
//! failure propagates immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::{BacklogError, Result};

/// Default number of retries after the initial attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default pause between attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(15_000);

/// Retry configuration for rate-limited calls.
///
/// The delay is constant across attempts; the remote rate limiter resets on
/// a fixed window, so growing the delay buys nothing.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use backlogapi::RetryPolicy;
///
/// // Default: 3 retries, 15 seconds apart
/// let policy = RetryPolicy::default();
///
/// // Custom: 5 retries, 2 seconds apart
/// let policy = RetryPolicy::new(5, Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// Fixed pause before each retry.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Create a policy with the given retry count and delay.
    #[must_use]
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// A policy that never retries.
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            delay: Duration::ZERO,
        }
    }
}

/// Run an async operation, retrying rate-limited failures.
///
/// The operation is attempted up to `policy.max_retries + 1` times. A
/// failure that is not a rate limit (see [`BacklogError::is_rate_limit`])
/// propagates immediately without any delay. When retries are exhausted the
/// last observed error is returned.
///
/// # Example
///
/// ```no_run
/// use backlogapi::{with_retry, BacklogClient};
///
/// # async fn example() -> backlogapi::Result<()> {
/// let client = BacklogClient::from_env()?;
/// let _response = with_retry(client.retry_policy(), || client.get("issues/DEMO-1")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut retries = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_rate_limit() && retries < policy.max_retries => {
                retries += 1;
                tracing::warn!(
                    retry = retries,
                    max_retries = policy.max_retries,
                    delay_ms = policy.delay.as_millis() as u64,
                    "rate limited, waiting before retry"
                );
                tokio::time::sleep(policy.delay).await;
            }
            Err(err) => {
                tracing::error!(error = %err, retries, "giving up");
                return Err(err);
            }
        }
    }
}
