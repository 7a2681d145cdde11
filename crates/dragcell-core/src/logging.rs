use tracing_subscriber::EnvFilter;

/// Default filter used by [`init`] when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,dragcell=debug";

/// Install a formatted `tracing` subscriber.
///
/// Honors `RUST_LOG` and falls back to [`DEFAULT_FILTER`].
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Install a formatted subscriber with an explicit filter directive.
///
/// Returns `false` if a global subscriber was already installed, which is the
/// usual case when several tests share a process.
pub fn init_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_test_writer()
        .try_init()
        .is_ok()
}
