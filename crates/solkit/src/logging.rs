use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "solkit=info";

/// Installs the global `tracing` subscriber. Honors `RUST_LOG` and writes to
/// stderr so it does not interleave with prompt output on stdout.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be set when running inside tests
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
