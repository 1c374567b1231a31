/// Initializes the tracing/logging infrastructure for the application.
///
/// Structured logging via the `tracing` crate with environment-based
/// filtering: set `RUST_LOG` to control verbosity.
///
/// - `RUST_LOG=info` - session lifecycle and outcomes
/// - `RUST_LOG=debug` - every command and backend call
/// - `RUST_LOG=myshop_storefront=debug` - debug only for this crate
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
