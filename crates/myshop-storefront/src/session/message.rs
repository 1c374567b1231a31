//! # Session Messages
//!
//! The command types sent from the [`StorefrontClient`] to the
//! [`StorefrontSession`]. Every command carries a oneshot sender the session
//! answers on, so each call gets its own reply channel and callers never
//! observe shared state directly.
//!
//! [`StorefrontClient`]: crate::clients::StorefrontClient
//! [`StorefrontSession`]: crate::session::StorefrontSession

use crate::model::{OrderOutcome, SeedReport, StorefrontView};
use crate::session::error::SessionError;
use myshop_backend::model::{Product, ProductId};
use tokio::sync::oneshot;

/// Type alias for the one-shot reply channel used by the session.
pub type Response<T> = oneshot::Sender<Result<T, SessionError>>;

/// Commands the storefront session understands.
///
/// Mutations answer with the updated [`StorefrontView`], giving callers an
/// explicit command-result to render from after each state change.
#[derive(Debug)]
pub enum SessionRequest {
    /// Fetch the catalog from the backend, replacing the product list on
    /// success and recording an error message on failure.
    LoadCatalog { respond_to: Response<StorefrontView> },
    /// Ask the backend to seed sample data, then refresh the catalog.
    ReseedCatalog { respond_to: Response<SeedReport> },
    /// Put one unit of a product in the cart.
    AddToCart {
        product: Product,
        respond_to: Response<StorefrontView>,
    },
    /// Drop a product line from the cart.
    RemoveFromCart {
        id: ProductId,
        respond_to: Response<StorefrontView>,
    },
    /// Submit the cart as an order.
    PlaceOrder { respond_to: Response<OrderOutcome> },
    /// Read-only view of the current state.
    Snapshot { respond_to: Response<StorefrontView> },
}
