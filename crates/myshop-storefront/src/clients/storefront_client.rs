//! # Storefront Client
//!
//! The cloneable, type-safe handle for the storefront session. Each method
//! sends one [`SessionRequest`] over the command channel and awaits the
//! session's reply on a oneshot channel. The client holds only a sender, so
//! cloning is cheap and handles can be shared across tasks.

use crate::model::{OrderOutcome, SeedReport, StorefrontView};
use crate::session::error::SessionError;
use crate::session::message::SessionRequest;
use myshop_backend::model::{Product, ProductId};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the storefront session.
#[derive(Clone)]
pub struct StorefrontClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl StorefrontClient {
    pub fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    /// Fetches the catalog from the backend. A load failure still answers
    /// `Ok`: the view carries the error message and the previous product
    /// list.
    #[instrument(skip(self))]
    pub async fn load_catalog(&self) -> Result<StorefrontView, SessionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::LoadCatalog { respond_to })
            .await
            .map_err(|_| SessionError::SessionClosed)?;
        response.await.map_err(|_| SessionError::SessionDropped)?
    }

    /// Seeds sample data on the backend, then refreshes the catalog.
    #[instrument(skip(self))]
    pub async fn reseed_catalog(&self) -> Result<SeedReport, SessionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::ReseedCatalog { respond_to })
            .await
            .map_err(|_| SessionError::SessionClosed)?;
        response.await.map_err(|_| SessionError::SessionDropped)?
    }

    /// Puts one unit of `product` in the cart and returns the updated view.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_to_cart(&self, product: Product) -> Result<StorefrontView, SessionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::AddToCart {
                product,
                respond_to,
            })
            .await
            .map_err(|_| SessionError::SessionClosed)?;
        response.await.map_err(|_| SessionError::SessionDropped)?
    }

    /// Drops the cart line for `id` (a no-op for unknown ids) and returns
    /// the updated view.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, id: ProductId) -> Result<StorefrontView, SessionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::RemoveFromCart { id, respond_to })
            .await
            .map_err(|_| SessionError::SessionClosed)?;
        response.await.map_err(|_| SessionError::SessionDropped)?
    }

    /// Submits the cart as an order.
    #[instrument(skip(self))]
    pub async fn place_order(&self) -> Result<OrderOutcome, SessionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::PlaceOrder { respond_to })
            .await
            .map_err(|_| SessionError::SessionClosed)?;
        response.await.map_err(|_| SessionError::SessionDropped)?
    }

    /// Read-only snapshot of the current storefront state.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<StorefrontView, SessionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Snapshot { respond_to })
            .await
            .map_err(|_| SessionError::SessionClosed)?;
        response.await.map_err(|_| SessionError::SessionDropped)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{create_mock_client, expect_add_to_cart, expect_place_order};
    use crate::model::{CartItem, OrderOutcome};
    use myshop_backend::model::{OrderId, OrderReceipt};

    fn empty_view() -> StorefrontView {
        StorefrontView {
            products: vec![],
            loading: false,
            error: None,
            cart: vec![],
            total: 0.0,
        }
    }

    #[tokio::test]
    async fn add_to_cart_sends_the_product_and_returns_the_view() {
        let (client, mut receiver) = create_mock_client(10);
        let product = Product::new(1u64, "Widget", 10.0);

        let sent = product.clone();
        let add_task = tokio::spawn(async move { client.add_to_cart(sent).await });

        let (received, responder) = expect_add_to_cart(&mut receiver)
            .await
            .expect("Expected AddToCart request");
        assert_eq!(received.id, ProductId(1));

        let view = StorefrontView {
            cart: vec![CartItem {
                product,
                qty: 1,
            }],
            total: 10.0,
            ..empty_view()
        };
        responder.send(Ok(view)).unwrap();

        let result = add_task.await.unwrap().unwrap();
        assert_eq!(result.cart_len(), 1);
        assert_eq!(result.total, 10.0);
    }

    #[tokio::test]
    async fn place_order_returns_the_receipt() {
        let (client, mut receiver) = create_mock_client(10);

        let order_task = tokio::spawn(async move { client.place_order().await });

        let responder = expect_place_order(&mut receiver)
            .await
            .expect("Expected PlaceOrder request");
        responder
            .send(Ok(OrderOutcome::Placed(OrderReceipt { id: OrderId(5) })))
            .unwrap();

        let outcome = order_task.await.unwrap().unwrap();
        assert_eq!(outcome, OrderOutcome::Placed(OrderReceipt { id: OrderId(5) }));
    }

    #[tokio::test]
    async fn place_order_surfaces_the_session_error() {
        let (client, mut receiver) = create_mock_client(10);

        let order_task = tokio::spawn(async move { client.place_order().await });

        let responder = expect_place_order(&mut receiver)
            .await
            .expect("Expected PlaceOrder request");
        responder
            .send(Err(SessionError::OrderRejected(
                myshop_backend::ApiError::Status(
                    myshop_backend::StatusCode::INTERNAL_SERVER_ERROR,
                ),
            )))
            .unwrap();

        let result = order_task.await.unwrap();
        assert!(matches!(result, Err(SessionError::OrderRejected(_))));
    }

    #[tokio::test]
    async fn a_dropped_session_maps_to_session_closed() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        let result = client.snapshot().await;
        assert!(matches!(result, Err(SessionError::SessionClosed)));
    }
}
