//! Error types for the storefront session.

use myshop_backend::ApiError;

/// Errors a caller can get back from the storefront client.
///
/// Catalog load failures are not here: the session recovers from them
/// locally by recording an error message in the view, so a failed load
/// still answers `Ok` with the message inside.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session task is gone and no longer accepts commands.
    #[error("Storefront session closed")]
    SessionClosed,

    /// The session dropped the reply channel without answering.
    #[error("Storefront session dropped response channel")]
    SessionDropped,

    /// The backend rejected the order; the cart is left untouched so the
    /// caller can retry.
    #[error("Order submission failed: {0}")]
    OrderRejected(#[source] ApiError),
}
