//! Tracing subscriber setup

use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber, fmt, prelude::*};

use crate::error::{CliError, Result};

/// Install the global subscriber.
///
/// Verbose runs log everything at `DEBUG` and above. Otherwise `RUST_LOG`
/// decides, defaulting to `warn`. Logs go to stderr so they never mix with
/// command output.
pub fn init(verbose: bool) -> Result<()> {
    if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::Logging(e.to_string()))?;
        tracing::debug!("Verbose mode enabled");
        return Ok(());
    }

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .map_err(|e| CliError::Logging(e.to_string()))?;
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
