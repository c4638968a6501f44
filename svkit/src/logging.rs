//! Diagnostic logging, kept apart from the user-facing reports.

use eyre::Result;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` enables debug output for
/// svkit's own crates and everything else stays at `error`.
pub fn init(verbose: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("svkit=debug,svkit_core=debug"),
        Err(_) => EnvFilter::new("error"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre::eyre!("failed to install log subscriber: {e}"))
}
