/*
[INPUT]:  Log filter directive from the host application
[OUTPUT]: Global tracing subscriber writing to stdout
[POS]:    Logging layer - opt-in diagnostics for foreign hosts
[UPDATE]: When changing log format or subscriber setup
*/

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::{BindingError, Result};

/// Install the global subscriber with the given filter (e.g. "info",
/// "hyperliquid_binding=debug")
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_logging(filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(filter).map_err(|e| {
        BindingError::invalid_input(format!("invalid log filter {filter:?}: {e}"))
    })?;

    match tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
    {
        Ok(()) => debug!(filter, "logging initialised"),
        Err(_) => debug!(filter, "subscriber already installed; keeping existing"),
    }
    Ok(())
}
