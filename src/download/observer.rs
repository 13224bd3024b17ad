//! Per-transfer outcome notifications.

use std::path::Path;

use crate::error::Error;

/// Receives exactly one notification per transfer, in completion order.
///
/// The engine invokes observers from concurrently running transfers, so
/// implementations must protect their internal state (atomics or a lock).
/// A slow observer throttles the engine's throughput but cannot deadlock it.
pub trait DownloadObserver: Send + Sync {
    /// Called after the full response body has been written to `destination`.
    fn on_success(&self, source_url: &str, destination: &Path);

    /// Called when a transfer fails for any reason (connection error,
    /// non-success status, write failure, timeout).
    fn on_failure(&self, source_url: &str, destination: &Path, cause: &Error);
}

/// Observer that ignores all notifications.
///
/// Passed explicitly by callers that do not need per-transfer feedback.
pub struct NoOpObserver;

impl DownloadObserver for NoOpObserver {
    fn on_success(&self, _source_url: &str, _destination: &Path) {}

    fn on_failure(&self, _source_url: &str, _destination: &Path, _cause: &Error) {}
}
