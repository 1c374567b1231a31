//! Wire data types exchanged with the MyShop backend.

pub mod order;
pub mod product;
pub mod seed;

pub use order::{OrderId, OrderItem, OrderPayload, OrderReceipt};
pub use product::{Product, ProductId};
pub use seed::SeedOutcome;
