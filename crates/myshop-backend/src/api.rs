//! # Backend Contract
//!
//! The [`Backend`] trait is the seam between the storefront session and the
//! outside world. The session only ever sees `Arc<dyn Backend>`, injected at
//! run time, so the same session logic drives the real [`HttpBackend`] in
//! production and a [`MockBackend`] in tests.
//!
//! [`HttpBackend`]: crate::http::HttpBackend
//! [`MockBackend`]: crate::mock::MockBackend

use crate::error::ApiError;
use crate::model::{OrderPayload, OrderReceipt, Product, SeedOutcome};
use async_trait::async_trait;

/// Operations the storefront performs against the backend.
#[async_trait]
pub trait Backend: Send + Sync + 'static {
    /// Fetches the current product listing.
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Submits an order and returns the backend's receipt for it.
    async fn submit_order(&self, payload: &OrderPayload) -> Result<OrderReceipt, ApiError>;

    /// Asks the backend to populate sample product data.
    async fn seed_products(&self) -> Result<SeedOutcome, ApiError>;
}
