//! # Mock Backend
//!
//! [`MockBackend`] implements the same [`Backend`] API as the production
//! client but answers from a FIFO queue of scripted responses, so storefront
//! logic can be tested fast and deterministically without a running backend.
//!
//! ## When to use Mocks vs a Real Backend
//!
//! | Feature             | MockBackend              | HttpBackend            |
//! |---------------------|--------------------------|------------------------|
//! | **Speed**           | Instant (in-memory)      | Network round-trips    |
//! | **Determinism**     | 100% deterministic       | Subject to the network |
//! | **Error injection** | Easy (`return_err`)      | Needs a broken server  |
//! | **Use case**        | Session/unit tests       | Production, e2e        |
//!
//! ## Usage
//!
//! ```rust
//! use myshop_backend::mock::MockBackend;
//! use myshop_backend::model::Product;
//! use myshop_backend::Backend;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockBackend::new();
//!     mock.expect_fetch_products()
//!         .return_ok(vec![Product::new(1u64, "Widget", 10.0)]);
//!
//!     let products = mock.fetch_products().await.unwrap();
//!     assert_eq!(products.len(), 1);
//!
//!     mock.verify(); // Ensures all expectations were consumed
//! }
//! ```
//!
//! A call with no matching expectation panics, which makes "this operation
//! performs no backend call" directly testable: script nothing and `verify()`.

use crate::api::Backend;
use crate::error::ApiError;
use crate::model::{OrderPayload, OrderReceipt, Product, SeedOutcome};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A scripted response the mock will serve for one call.
enum Expectation {
    FetchProducts(Result<Vec<Product>, ApiError>),
    SubmitOrder(Result<OrderReceipt, ApiError>),
    SeedProducts(Result<SeedOutcome, ApiError>),
}

impl Expectation {
    fn operation(&self) -> &'static str {
        match self {
            Expectation::FetchProducts(_) => "fetch_products",
            Expectation::SubmitOrder(_) => "submit_order",
            Expectation::SeedProducts(_) => "seed_products",
        }
    }
}

/// A [`Backend`] double with expectation tracking for fluent testing.
///
/// Cloning shares the expectation queue, so a test can hand one clone to the
/// session (as `Arc<dyn Backend>`) and keep another to script and verify.
#[derive(Clone, Default)]
pub struct MockBackend {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl MockBackend {
    /// Creates a mock with no expectations; any call will panic until one
    /// is scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `fetch_products` call.
    pub fn expect_fetch_products(&self) -> FetchProductsExpectation {
        FetchProductsExpectation {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `submit_order` call.
    pub fn expect_submit_order(&self) -> SubmitOrderExpectation {
        SubmitOrderExpectation {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `seed_products` call.
    pub fn expect_seed_products(&self) -> SeedProductsExpectation {
        SeedProductsExpectation {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that every scripted expectation was consumed.
    pub fn verify(&self) {
        let expectations = self.expectations.lock().unwrap();
        if !expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                expectations.len()
            );
        }
    }

    fn next_expectation(&self, operation: &'static str) -> Expectation {
        let mut expectations = self.expectations.lock().unwrap();
        match expectations.pop_front() {
            Some(expectation) if expectation.operation() == operation => expectation,
            Some(expectation) => panic!(
                "Expected {} call but the backend received {}",
                expectation.operation(),
                operation
            ),
            None => panic!("Unexpected {} call: no expectation scripted", operation),
        }
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        match self.next_expectation("fetch_products") {
            Expectation::FetchProducts(response) => response,
            _ => unreachable!(),
        }
    }

    async fn submit_order(&self, _payload: &OrderPayload) -> Result<OrderReceipt, ApiError> {
        match self.next_expectation("submit_order") {
            Expectation::SubmitOrder(response) => response,
            _ => unreachable!(),
        }
    }

    async fn seed_products(&self) -> Result<SeedOutcome, ApiError> {
        match self.next_expectation("seed_products") {
            Expectation::SeedProducts(response) => response,
            _ => unreachable!(),
        }
    }
}

/// Builder for `fetch_products` expectations.
pub struct FetchProductsExpectation {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl FetchProductsExpectation {
    /// Scripts a successful product listing.
    pub fn return_ok(self, products: Vec<Product>) {
        let mut expectations = self.expectations.lock().unwrap();
        expectations.push_back(Expectation::FetchProducts(Ok(products)));
    }

    /// Scripts a failed product listing.
    pub fn return_err(self, error: ApiError) {
        let mut expectations = self.expectations.lock().unwrap();
        expectations.push_back(Expectation::FetchProducts(Err(error)));
    }
}

/// Builder for `submit_order` expectations.
pub struct SubmitOrderExpectation {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl SubmitOrderExpectation {
    /// Scripts a successful order submission.
    pub fn return_ok(self, receipt: OrderReceipt) {
        let mut expectations = self.expectations.lock().unwrap();
        expectations.push_back(Expectation::SubmitOrder(Ok(receipt)));
    }

    /// Scripts a rejected order submission.
    pub fn return_err(self, error: ApiError) {
        let mut expectations = self.expectations.lock().unwrap();
        expectations.push_back(Expectation::SubmitOrder(Err(error)));
    }
}

/// Builder for `seed_products` expectations.
pub struct SeedProductsExpectation {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl SeedProductsExpectation {
    /// Scripts a successful seeding run.
    pub fn return_ok(self, outcome: SeedOutcome) {
        let mut expectations = self.expectations.lock().unwrap();
        expectations.push_back(Expectation::SeedProducts(Ok(outcome)));
    }

    /// Scripts a failed seeding run.
    pub fn return_err(self, error: ApiError) {
        let mut expectations = self.expectations.lock().unwrap();
        expectations.push_back(Expectation::SeedProducts(Err(error)));
    }
}
