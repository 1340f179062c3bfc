/// Initializes structured logging for the demo binary.
///
/// Verbosity is controlled via the `RUST_LOG` environment variable:
/// - `RUST_LOG=info` - construction and change notifications
/// - `RUST_LOG=debug` - plus property installation from the framework
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
