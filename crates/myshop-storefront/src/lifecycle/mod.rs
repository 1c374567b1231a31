//! # Lifecycle & Orchestration
//!
//! Wiring for the storefront as a whole: [`StorefrontSystem`] spawns the
//! session task with its backend injected, triggers the initial catalog
//! load, and coordinates graceful shutdown; [`setup_tracing`] initializes
//! the logging infrastructure once per process.
//!
//! Shutdown follows the channel-closure pattern: dropping the last client
//! closes the command channel, the session's `recv()` returns `None`, and
//! the task exits after logging its final state.

pub mod system;
pub mod tracing;

pub use system::*;
pub use tracing::*;
