//! Typed handles for talking to the storefront session.

pub mod storefront_client;

pub use storefront_client::StorefrontClient;
