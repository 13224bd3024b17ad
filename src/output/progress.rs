//! Progress bar observer for download batches.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

use crate::download::DownloadObserver;
use crate::error::Error;

/// Observer that steps a progress bar once per outcome and keeps
/// success/failure tallies.
///
/// Notifications arrive from concurrently running transfers; the bar is
/// internally synchronized and the counters are atomics.
pub struct ProgressBarObserver {
    bar: ProgressBar,
    successes: AtomicU64,
    failures: AtomicU64,
}

impl ProgressBarObserver {
    /// Create a bar sized to the total number of transfers in the batch.
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} Downloading [{bar:40.cyan/blue}] {pos}/{len}")
                .unwrap()
                .progress_chars("#>-"),
        );

        Self {
            bar,
            successes: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }
    }

    /// Number of successful downloads so far.
    pub fn success_count(&self) -> u64 {
        self.successes.load(Ordering::Relaxed)
    }

    /// Number of failed downloads so far.
    pub fn failure_count(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// Finish and clear the bar.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl DownloadObserver for ProgressBarObserver {
    fn on_success(&self, source_url: &str, destination: &Path) {
        self.bar.inc(1);
        self.successes.fetch_add(1, Ordering::Relaxed);
        tracing::debug!("Downloaded {} to {}", source_url, destination.display());
    }

    fn on_failure(&self, source_url: &str, _destination: &Path, cause: &Error) {
        self.bar.inc(1);
        self.failures.fetch_add(1, Ordering::Relaxed);
        tracing::warn!("Download failed for {}: {}", source_url, cause);
    }
}
