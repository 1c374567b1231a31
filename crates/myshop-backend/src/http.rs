//! # HTTP Backend
//!
//! The production [`Backend`] implementation, backed by a shared reqwest
//! client. One instance per process is enough; reqwest pools connections
//! internally and the handle is cheap to clone.

use crate::api::Backend;
use crate::config::BackendConfig;
use crate::error::ApiError;
use crate::model::{OrderPayload, OrderReceipt, Product, SeedOutcome};
use async_trait::async_trait;
use tracing::debug;

/// Talks to the MyShop backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            base_url: config.base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Convenience constructor reading [`BackendConfig`] from the
    /// environment.
    pub fn from_env() -> Self {
        Self::new(BackendConfig::from_env())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps non-2xx responses to [`ApiError::Status`]; error bodies are not
    /// contractually defined, so they are dropped.
    fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status(status))
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.url("/api/products");
        debug!(%url, "GET products");
        let response = self.client.get(&url).send().await?;
        let products = Self::expect_success(response)?.json::<Vec<Product>>().await?;
        Ok(products)
    }

    async fn submit_order(&self, payload: &OrderPayload) -> Result<OrderReceipt, ApiError> {
        let url = self.url("/api/orders");
        debug!(%url, items = payload.items.len(), total = payload.total, "POST order");
        let response = self.client.post(&url).json(payload).send().await?;
        let receipt = Self::expect_success(response)?.json::<OrderReceipt>().await?;
        Ok(receipt)
    }

    async fn seed_products(&self) -> Result<SeedOutcome, ApiError> {
        let url = self.url("/api/seed-products");
        debug!(%url, "POST seed");
        let response = self.client.post(&url).send().await?;
        let outcome = Self::expect_success(response)?.json::<SeedOutcome>().await?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls_are_joined_against_the_base() {
        let backend = HttpBackend::new(BackendConfig::new("http://localhost:8000/"));
        assert_eq!(backend.url("/api/products"), "http://localhost:8000/api/products");
        assert_eq!(backend.url("/api/orders"), "http://localhost:8000/api/orders");
    }
}
