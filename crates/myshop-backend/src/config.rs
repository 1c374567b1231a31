use std::env;

/// Environment variable holding the backend base address.
pub const BACKEND_URL_VAR: &str = "MYSHOP_BACKEND_URL";

/// Base address used when the environment does not supply one.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Runtime configuration for the backend client.
///
/// The base address is the only knob the storefront has. It comes from the
/// `MYSHOP_BACKEND_URL` environment variable and falls back to the local
/// development address.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    /// Creates a config pointing at the given base address.
    ///
    /// A trailing slash is stripped so endpoint paths can be appended
    /// verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads the configuration from the environment.
    pub fn from_env() -> Self {
        let base_url =
            env::var(BACKEND_URL_VAR).unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let config = Self::new(base_url);
        tracing::debug!(base_url = %config.base_url, "Backend config loaded");
        config
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}
