//! Tracing subscriber setup for the skirmish binary.

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`, defaulting to INFO.
///
/// Logs go to stderr so the summary on stdout stays machine-readable.
pub fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
