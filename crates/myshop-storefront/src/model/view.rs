use crate::model::CartItem;
use myshop_backend::model::{OrderReceipt, Product, SeedOutcome};

/// Snapshot of the whole storefront, returned after every command.
///
/// This replaces the original UI's implicit re-render-on-state-change: a
/// caller renders from the view it got back instead of observing shared
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontView {
    /// The product catalog as last successfully loaded.
    pub products: Vec<Product>,
    /// True while a catalog load is in flight.
    pub loading: bool,
    /// Message from the last failed catalog load, if any.
    pub error: Option<String>,
    /// Current cart contents, in insertion order.
    pub cart: Vec<CartItem>,
    /// Running cart total.
    pub total: f64,
}

impl StorefrontView {
    /// Number of distinct cart lines, as shown in the "Cart (N)" badge.
    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }
}

/// What came of a place-order command.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    /// The backend accepted the order; the cart has been cleared.
    Placed(OrderReceipt),
    /// The cart was empty, so no order was submitted.
    EmptyCart,
}

/// Result of a reseed command.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedReport {
    /// The backend's answer, or `None` if seeding failed (failures are
    /// logged, not surfaced).
    pub outcome: Option<SeedOutcome>,
    /// The storefront after the post-seed catalog refresh.
    pub view: StorefrontView,
}
