/// Installs the global `tracing` subscriber.
///
/// Verbosity follows `RUST_LOG`, e.g. `RUST_LOG=macropoint_tracker=debug`
/// also shows every built request.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
