use crate::clients::StorefrontClient;
use crate::session;
use crate::session::error::SessionError;
use myshop_backend::Backend;
use std::sync::Arc;
use tracing::{error, info};

/// Command channel capacity for the session.
const SESSION_BUFFER: usize = 32;

/// Runtime orchestrator for the storefront.
///
/// `StorefrontSystem` owns the session task and hands out the client:
///
/// ```rust,ignore
/// let backend = Arc::new(HttpBackend::from_env());
/// let system = StorefrontSystem::start(backend).await?;
///
/// let view = system.client.snapshot().await?;
/// // ... add to cart, place order ...
///
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    /// Client for interacting with the storefront session.
    pub client: StorefrontClient,

    /// Task handle for the running session (used for graceful shutdown).
    handle: tokio::task::JoinHandle<()>,
}

impl StorefrontSystem {
    /// Spawns the session with `backend` injected and performs the initial
    /// catalog load, so the storefront comes up already populated (or with
    /// the load error recorded in its view).
    pub async fn start(backend: Arc<dyn Backend>) -> Result<Self, SessionError> {
        let (session, client) = session::new(SESSION_BUFFER);
        let handle = tokio::spawn(session.run(backend));

        // The storefront loads its catalog once when first shown.
        let view = client.load_catalog().await?;
        info!(
            products = view.products.len(),
            error = view.error.as_deref().unwrap_or(""),
            "Storefront ready"
        );

        Ok(Self { client, handle })
    }

    /// Gracefully shuts the storefront down.
    ///
    /// Dropping the client closes the command channel; the session drains
    /// what is left and exits. Any clones of the client handed out earlier
    /// keep the session alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Session task failed: {:?}", e);
            return Err(format!("Session task failed: {:?}", e));
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
