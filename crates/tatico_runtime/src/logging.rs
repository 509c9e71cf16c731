//! Tracing subscriber setup.

use tatico_foundation::{Error, ErrorKind, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "TATICO_LOG";

/// Installs a stderr fmt subscriber.
///
/// The filter comes from `TATICO_LOG` when set and valid, otherwise from
/// `default_filter`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(format!("failed to install logger: {e}"))))
}
