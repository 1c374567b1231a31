//! Storefront-side domain types: the cart, the catalog state machine, and
//! the views handed back to callers after each command.

pub mod cart;
pub mod catalog;
pub mod view;

pub use cart::{Cart, CartItem};
pub use catalog::CatalogStatus;
pub use view::{OrderOutcome, SeedReport, StorefrontView};
