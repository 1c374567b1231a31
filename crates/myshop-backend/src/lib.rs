//! # MyShop Backend Client
//!
//! This crate owns the collaborator contract between the storefront and the
//! MyShop backend: the wire data types, the [`Backend`] trait, and the
//! reqwest-based [`HttpBackend`] implementation.
//!
//! The HTTP surface consumed (not owned) by this crate:
//!
//! | Method | Path                 | Body                  | Success response   |
//! |--------|----------------------|-----------------------|--------------------|
//! | GET    | `/api/products`      | —                     | list of `Product`  |
//! | POST   | `/api/orders`        | `OrderPayload` (JSON) | `OrderReceipt`     |
//! | POST   | `/api/seed-products` | —                     | `SeedOutcome`      |
//!
//! Any non-2xx status is treated as a failure; error bodies are not parsed.
//!
//! ## Testing
//!
//! [`mock::MockBackend`] implements [`Backend`] against a FIFO queue of
//! scripted responses, so session logic can be tested without a running
//! backend. See the [`mock`] module for the expectation API.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;
pub mod model;

// Re-export core types for convenience
pub use api::Backend;
pub use config::BackendConfig;
pub use error::ApiError;
pub use http::HttpBackend;

// Status codes show up in `ApiError::Status`; re-exported so downstream
// crates don't need a direct reqwest dependency to match on them.
pub use reqwest::StatusCode;
