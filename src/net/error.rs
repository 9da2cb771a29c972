//! Error type shared by every API call.
//!
//! ERROR HANDLING
//! ==============
//! Only [`ApiError::Unauthorized`] is acted on centrally (by the pipeline).
//! Every other variant travels back to the page that made the call and ends
//! up as an inline alert.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response arrived (DNS, CORS, connection reset, ...).
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request timed out after {0} ms")]
    Timeout(u64),
    /// The backend rejected the credential. The session is already torn down.
    #[error("session expired")]
    Unauthorized,
    /// Non-2xx response other than 401.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// A 2xx body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// Input rejected before any request was made.
    #[error("{0}")]
    Validation(String),
    /// Called outside the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

/// Error payload the backend attaches to failed requests.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// Build a status error, preferring the backend's `message` field.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("request failed with status {status}"));
        Self::Status { status, message }
    }

    /// Text for an inline alert: backend and validation messages win,
    /// everything else falls back to the caller's wording.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Status { message, .. } | Self::Validation(message) => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// Worth a second attempt: the request may succeed unchanged.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Timeout(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Unauthorized | Self::Decode(_) | Self::Validation(_) | Self::Unavailable => false,
        }
    }
}
