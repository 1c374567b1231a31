//! Demo driver for the MyShop storefront.
//!
//! Starts the session against the configured backend, seeds sample data if
//! the catalog comes back empty, then walks the happy path: add a product
//! to the cart twice and place the order.

use myshop_backend::HttpBackend;
use myshop_storefront::lifecycle::{setup_tracing, StorefrontSystem};
use myshop_storefront::model::OrderOutcome;
use std::sync::Arc;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting MyShop storefront");

    let backend = Arc::new(HttpBackend::from_env());
    let system = StorefrontSystem::start(backend)
        .await
        .map_err(|e| e.to_string())?;

    let mut view = system.client.snapshot().await.map_err(|e| e.to_string())?;

    if view.products.is_empty() && view.error.is_none() {
        info!("No products yet, seeding sample data");
        let report = system
            .client
            .reseed_catalog()
            .await
            .map_err(|e| e.to_string())?;
        match &report.outcome {
            Some(outcome) => info!(status = %outcome.status, "Seed finished"),
            None => warn!("Seed failed, continuing with an empty catalog"),
        }
        view = report.view;
    }

    if let Some(error) = &view.error {
        warn!(%error, "Catalog unavailable");
    }

    let Some(product) = view.products.first().cloned() else {
        warn!("Catalog is empty, nothing to order");
        return system.shutdown().await;
    };

    info!(title = %product.title, price = product.price, "Adding product to cart");
    system
        .client
        .add_to_cart(product.clone())
        .await
        .map_err(|e| e.to_string())?;
    let cart_view = system
        .client
        .add_to_cart(product)
        .await
        .map_err(|e| e.to_string())?;
    info!(
        items = cart_view.cart_len(),
        total = cart_view.total,
        "Cart ready"
    );

    let span = tracing::info_span!("order_processing");
    let order_result = async {
        info!("Placing order");
        system.client.place_order().await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(OrderOutcome::Placed(receipt)) => info!(order_id = %receipt.id, "Order placed"),
        Ok(OrderOutcome::EmptyCart) => warn!("Cart was empty, nothing submitted"),
        Err(e) => error!(error = %e, "Order submission failed"),
    }

    system.shutdown().await?;

    info!("Storefront session finished");
    Ok(())
}
