//! Caller-side retry for read queries.
//!
//! The pipeline itself never retries. Pages that load data opt in here with a
//! small budget; mutations never do.

#[cfg(test)]
#[path = "retry_test.rs"]
mod retry_test;

use std::future::Future;

use leptos::logging::log;

use super::error::ApiError;

/// Retry budget for read queries.
pub const QUERY_RETRIES: u32 = 1;

/// Run `op`, re-running it up to `retries` more times while it fails with a
/// retryable error.
///
/// # Errors
///
/// Returns the last error once the budget is spent or a non-retryable error
/// occurs.
pub async fn with_retry<F, Fut, R>(retries: u32, mut op: F) -> Result<R, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<R, ApiError>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Err(e) if attempt < retries && e.is_retryable() => {
                attempt += 1;
                log!("retrying after {e} (attempt {attempt}/{retries})");
            }
            result => return result,
        }
    }
}
