//! Failure taxonomy for backend calls.

use reqwest::StatusCode;

/// Outcome of a failed backend call, surfaced to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    /// No response was received (DNS, connect, TLS, or mid-body failure).
    #[error("http transport failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// A response arrived with a non-success status; the body is carried verbatim.
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of the failure, when one was observed. Lets callers
    /// special-case statuses (a 401 typically redirects to login).
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(error) => error.status(),
            _ => None,
        }
    }
}
