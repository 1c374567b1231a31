//! # Storefront Session
//!
//! One task owns the whole storefront: catalog, cart, and load status.
//! Commands arrive as [`SessionRequest`] messages and are processed
//! sequentially, which gives the single-threaded execution model the
//! storefront needs without any locking.
//!
//! ## Structure
//!
//! - [`actor`] - [`StorefrontSession`], the event loop that owns the state
//! - [`message`] - [`SessionRequest`] and the [`Response`] reply alias
//! - [`error`] - [`SessionError`] for channel and order failures
//! - [`new()`] - Factory that creates the session and its client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let backend = Arc::new(HttpBackend::from_env());
//! let (session, client) = session::new(32);
//! tokio::spawn(session.run(backend));
//!
//! let view = client.load_catalog().await?;
//! ```

pub mod actor;
pub mod error;
pub mod message;

pub use actor::StorefrontSession;
pub use error::SessionError;
pub use message::{Response, SessionRequest};

use crate::clients::StorefrontClient;
use tokio::sync::mpsc;

/// Creates a new storefront session and its client.
///
/// `buffer_size` is the command channel capacity; senders wait when it is
/// full.
pub fn new(buffer_size: usize) -> (StorefrontSession, StorefrontClient) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (
        StorefrontSession::new(receiver),
        StorefrontClient::new(sender),
    )
}
