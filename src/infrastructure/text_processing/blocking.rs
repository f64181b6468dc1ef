use std::time::Duration;

use crate::application::ports::ExtractionError;

pub const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs a CPU-bound decoder off the async runtime, bounded by `timeout`.
///
/// On timeout the worker thread is left to finish on its own; its result is dropped.
pub(super) async fn decode_blocking<D>(
    format: &'static str,
    timeout: Duration,
    decode: D,
) -> Result<String, ExtractionError>
where
    D: FnOnce() -> Result<String, ExtractionError> + Send + 'static,
{
    tokio::time::timeout(timeout, tokio::task::spawn_blocking(decode))
        .await
        .map_err(|_| ExtractionError::TimedOut {
            format,
            after: timeout,
        })?
        .map_err(|e| ExtractionError::malformed(format, format!("decoder task failed: {e}")))?
}
