//! # Client-Side Test Plumbing
//!
//! Helpers for testing [`StorefrontClient`] logic without running a real
//! session: [`create_mock_client`] hands back the client plus the receiving
//! end of its command channel, and the `expect_*` helpers assert which
//! command arrived and hand over its reply channel so the test can script
//! the answer.
//!
//! For testing the session itself, script the backend instead with
//! [`myshop_backend::mock::MockBackend`].

use crate::clients::StorefrontClient;
use crate::model::{OrderOutcome, SeedReport, StorefrontView};
use crate::session::error::SessionError;
use crate::session::message::SessionRequest;
use myshop_backend::model::{Product, ProductId};
use tokio::sync::{mpsc, oneshot};

/// Creates a client and the receiver its commands arrive on.
pub fn create_mock_client(
    buffer_size: usize,
) -> (StorefrontClient, mpsc::Receiver<SessionRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StorefrontClient::new(sender), receiver)
}

/// Asserts the next command is `LoadCatalog` and returns its reply channel.
pub async fn expect_load_catalog(
    receiver: &mut mpsc::Receiver<SessionRequest>,
) -> Option<oneshot::Sender<Result<StorefrontView, SessionError>>> {
    match receiver.recv().await {
        Some(SessionRequest::LoadCatalog { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Asserts the next command is `ReseedCatalog` and returns its reply
/// channel.
pub async fn expect_reseed_catalog(
    receiver: &mut mpsc::Receiver<SessionRequest>,
) -> Option<oneshot::Sender<Result<SeedReport, SessionError>>> {
    match receiver.recv().await {
        Some(SessionRequest::ReseedCatalog { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Asserts the next command is `AddToCart` and returns the product with the
/// reply channel.
pub async fn expect_add_to_cart(
    receiver: &mut mpsc::Receiver<SessionRequest>,
) -> Option<(
    Product,
    oneshot::Sender<Result<StorefrontView, SessionError>>,
)> {
    match receiver.recv().await {
        Some(SessionRequest::AddToCart {
            product,
            respond_to,
        }) => Some((product, respond_to)),
        _ => None,
    }
}

/// Asserts the next command is `RemoveFromCart` and returns the id with the
/// reply channel.
pub async fn expect_remove_from_cart(
    receiver: &mut mpsc::Receiver<SessionRequest>,
) -> Option<(
    ProductId,
    oneshot::Sender<Result<StorefrontView, SessionError>>,
)> {
    match receiver.recv().await {
        Some(SessionRequest::RemoveFromCart { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Asserts the next command is `PlaceOrder` and returns its reply channel.
pub async fn expect_place_order(
    receiver: &mut mpsc::Receiver<SessionRequest>,
) -> Option<oneshot::Sender<Result<OrderOutcome, SessionError>>> {
    match receiver.recv().await {
        Some(SessionRequest::PlaceOrder { respond_to }) => Some(respond_to),
        _ => None,
    }
}
