//! # MyShop Storefront
//!
//! A client-side storefront session for the MyShop backend: it loads the
//! product catalog, keeps an in-memory shopping cart, and submits orders.
//!
//! All storefront state lives in a single [`session::StorefrontSession`]
//! task; callers talk to it through the cloneable
//! [`clients::StorefrontClient`], and every mutation answers with the
//! updated [`model::StorefrontView`] to render from. The backend is injected
//! as a [`Backend`](myshop_backend::Backend) trait object when the session
//! starts, so the same logic runs against HTTP in production and a scripted
//! mock in tests.
//!
//! ## 🚀 Core Components
//!
//! - **[model]**: The cart ([`model::Cart`]), catalog status
//!   ([`model::CatalogStatus`]), and the view types returned to callers.
//! - **[session]**: The actor that owns all state and processes commands
//!   sequentially.
//! - **[clients]**: The typed async handle hiding the message passing.
//! - **[lifecycle]**: [`lifecycle::StorefrontSystem`] orchestration plus
//!   tracing setup.
//!
//! ## 📚 Quick Start
//!
//! The demo binary in `main.rs` shows the full flow: start the system (which
//! performs the initial catalog load), seed if the catalog is empty, add a
//! product to the cart, and place the order.
//!
//! ## 🧪 Testing
//!
//! See [`mock`] for client-side test plumbing and
//! [`myshop_backend::mock::MockBackend`] for scripting backend responses.

pub mod clients;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod session;
