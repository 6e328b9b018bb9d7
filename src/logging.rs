//! Logging setup shared by the three binaries.

use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence when set. Otherwise the crate logs warnings,
/// or debug output when `verbose` is true. `log` records are bridged into the
/// subscriber, so both `log::debug!` and `tracing` spans show up.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "tokenshift=debug"
        } else {
            "tokenshift=warn"
        })
    });
    // A second initialization (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
