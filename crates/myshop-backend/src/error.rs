//! # Backend Errors
//!
//! Common error type for all backend calls. Both transport failures and
//! non-success statuses end up here; error response bodies are not part of
//! the contract and are never parsed.

/// Errors that can occur while talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: connection refused, timeout, or an
    /// unparseable response body.
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("backend returned {0}")]
    Status(reqwest::StatusCode),
}
