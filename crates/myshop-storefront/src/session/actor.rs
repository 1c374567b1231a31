//! # Storefront Session Actor
//!
//! The session is the "server" half of the storefront: it owns the catalog,
//! the cart, and the load status, and processes [`SessionRequest`] messages
//! strictly sequentially in its own task. That exclusive ownership is the
//! whole concurrency story — no locks, and at most one backend call in
//! flight, because the loop handles one command at a time.
//!
//! The [`Backend`] implementation is injected at `run()` time rather than at
//! construction, so the session can be created before the transport is
//! decided (HTTP in production, a scripted mock in tests).

use crate::model::{Cart, CatalogStatus, OrderOutcome, SeedReport, StorefrontView};
use crate::session::error::SessionError;
use crate::session::message::SessionRequest;
use myshop_backend::model::{OrderPayload, Product};
use myshop_backend::Backend;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Owns all storefront state and serves commands from the client.
pub struct StorefrontSession {
    receiver: mpsc::Receiver<SessionRequest>,
    catalog: Vec<Product>,
    status: CatalogStatus,
    cart: Cart,
}

impl StorefrontSession {
    pub(crate) fn new(receiver: mpsc::Receiver<SessionRequest>) -> Self {
        Self {
            receiver,
            catalog: Vec::new(),
            status: CatalogStatus::Idle,
            cart: Cart::new(),
        }
    }

    /// Runs the session's event loop, processing commands until every
    /// client handle has been dropped.
    pub async fn run(mut self, backend: Arc<dyn Backend>) {
        info!("Storefront session started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::LoadCatalog { respond_to } => {
                    debug!("LoadCatalog");
                    self.load_catalog(backend.as_ref()).await;
                    let _ = respond_to.send(Ok(self.view()));
                }
                SessionRequest::ReseedCatalog { respond_to } => {
                    debug!("ReseedCatalog");
                    let report = self.reseed_catalog(backend.as_ref()).await;
                    let _ = respond_to.send(Ok(report));
                }
                SessionRequest::AddToCart {
                    product,
                    respond_to,
                } => {
                    debug!(product_id = %product.id, "AddToCart");
                    self.cart.add(product);
                    info!(cart_len = self.cart.len(), total = self.cart.total(), "Cart updated");
                    let _ = respond_to.send(Ok(self.view()));
                }
                SessionRequest::RemoveFromCart { id, respond_to } => {
                    debug!(product_id = %id, "RemoveFromCart");
                    self.cart.remove(id);
                    info!(cart_len = self.cart.len(), total = self.cart.total(), "Cart updated");
                    let _ = respond_to.send(Ok(self.view()));
                }
                SessionRequest::PlaceOrder { respond_to } => {
                    debug!("PlaceOrder");
                    let result = self.place_order(backend.as_ref()).await;
                    match &result {
                        Ok(OrderOutcome::Placed(receipt)) => {
                            info!(order_id = %receipt.id, "Order placed")
                        }
                        Ok(OrderOutcome::EmptyCart) => debug!("Cart empty, nothing to order"),
                        Err(e) => warn!(error = %e, "Order submission failed"),
                    }
                    let _ = respond_to.send(result);
                }
                SessionRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.view()));
                }
            }
        }

        info!(
            products = self.catalog.len(),
            cart_len = self.cart.len(),
            "Storefront session shutdown"
        );
    }

    /// Fetches the catalog. Success replaces the product list; failure
    /// records the message and keeps the previous list. Either way the
    /// status settles out of `Loading` before the command answers.
    async fn load_catalog(&mut self, backend: &dyn Backend) {
        self.status = CatalogStatus::Loading;
        match backend.fetch_products().await {
            Ok(products) => {
                info!(count = products.len(), "Catalog loaded");
                self.catalog = products;
                self.status = CatalogStatus::Loaded;
            }
            Err(e) => {
                warn!(error = %e, "Catalog load failed");
                self.status = CatalogStatus::Errored(e.to_string());
            }
        }
    }

    /// Seeds sample data, then refreshes the catalog. Seeding failures are
    /// swallowed except for the log line; the catalog is not refreshed in
    /// that case.
    async fn reseed_catalog(&mut self, backend: &dyn Backend) -> SeedReport {
        match backend.seed_products().await {
            Ok(outcome) => {
                info!(status = %outcome.status, "Seed finished");
                self.load_catalog(backend).await;
                SeedReport {
                    outcome: Some(outcome),
                    view: self.view(),
                }
            }
            Err(e) => {
                warn!(error = %e, "Seed failed");
                SeedReport {
                    outcome: None,
                    view: self.view(),
                }
            }
        }
    }

    /// Submits the cart as a guest order. An empty cart is a no-op with no
    /// network call. On success the cart is cleared; on failure it is left
    /// exactly as it was so the caller can retry.
    async fn place_order(&mut self, backend: &dyn Backend) -> Result<OrderOutcome, SessionError> {
        if self.cart.is_empty() {
            return Ok(OrderOutcome::EmptyCart);
        }

        let payload = OrderPayload::for_guest(self.cart.order_items(), self.cart.total());
        match backend.submit_order(&payload).await {
            Ok(receipt) => {
                self.cart.clear();
                Ok(OrderOutcome::Placed(receipt))
            }
            Err(e) => Err(SessionError::OrderRejected(e)),
        }
    }

    fn view(&self) -> StorefrontView {
        StorefrontView {
            products: self.catalog.clone(),
            loading: self.status.is_loading(),
            error: self.status.error().map(str::to_string),
            cart: self.cart.items().to_vec(),
            total: self.cart.total(),
        }
    }
}
