/*
[INPUT]:  Futures from the async capability layer
[OUTPUT]: Blocking results for the synchronous façades
[POS]:    Runtime layer - shared tokio runtime behind every client handle
[UPDATE]: When changing runtime flavor or worker configuration
*/

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Handle, Runtime};

use crate::error::{BindingError, Result};

const WORKER_THREAD_NAME: &str = "hyperliquid-binding";

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Process-wide runtime, started on first use
pub fn get_runtime() -> Result<&'static Runtime> {
    if let Some(runtime) = RUNTIME.get() {
        return Ok(runtime);
    }

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .thread_name(WORKER_THREAD_NAME)
        .build()
        .map_err(|e| BindingError::Network {
            message: format!("failed to start async runtime: {e}"),
        })?;

    // A racing thread may have won; its runtime is kept and ours is dropped
    Ok(RUNTIME.get_or_init(|| runtime))
}

/// Drive `future` to completion on the shared runtime, blocking the caller
///
/// Fails instead of panicking when called from inside an async context.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output> {
    if Handle::try_current().is_ok() {
        return Err(BindingError::invalid_input(
            "blocking client called from within an async runtime; use the InfoApi/ExchangeApi traits instead",
        ));
    }
    Ok(get_runtime()?.block_on(future))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_is_shared() {
        let first = get_runtime().unwrap() as *const Runtime;
        let second = get_runtime().unwrap() as *const Runtime;
        assert_eq!(first, second);
    }

    #[test]
    fn test_block_on_returns_output() {
        let value = block_on(async { 21 * 2 }).unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_block_on_inside_runtime_is_rejected() {
        let err = block_on(async {}).unwrap_err();
        assert!(err.is_validation_error());
    }
}
