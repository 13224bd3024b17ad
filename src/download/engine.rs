//! Concurrent download engine.
//!
//! Executes a batch of independent transfers with a fixed upper bound on
//! simultaneous in-flight transfers. Every submitted request produces exactly
//! one outcome; a failed transfer never aborts the rest of the batch.

use std::path::PathBuf;

use futures::stream::{self, StreamExt};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::download::observer::DownloadObserver;
use crate::download::transport::Transport;
use crate::error::{Error, Result};

/// One file transfer: a source URL and the local path to write it to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub source_url: String,
    pub destination: PathBuf,
}

/// The result of a single transfer, produced exactly once per request.
#[derive(Debug)]
pub enum TransferOutcome {
    Success {
        source_url: String,
        destination: PathBuf,
    },
    Failure {
        source_url: String,
        destination: PathBuf,
        cause: Error,
    },
}

impl TransferOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TransferOutcome::Success { .. })
    }

    pub fn source_url(&self) -> &str {
        match self {
            TransferOutcome::Success { source_url, .. } => source_url,
            TransferOutcome::Failure { source_url, .. } => source_url,
        }
    }
}

/// Aggregate result of one engine invocation.
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<TransferOutcome>,
}

impl BatchReport {
    pub fn outcomes(&self) -> &[TransferOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    /// Iterate over the failed transfers only.
    pub fn failures(&self) -> impl Iterator<Item = &TransferOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}

/// Downloads batches of files with bounded concurrency.
///
/// The engine streams each response body to its destination path. An existing
/// file at the destination is truncated and overwritten without warning; a
/// missing parent directory is a per-item failure (the engine never creates
/// directories — callers ensure the output root exists).
pub struct DownloadEngine<T: Transport> {
    transport: T,
    concurrency: usize,
}

impl<T: Transport> DownloadEngine<T> {
    /// Create an engine that runs at most `concurrency` transfers at once.
    pub fn new(transport: T, concurrency: usize) -> Result<Self> {
        if concurrency < 1 {
            return Err(Error::Validation(
                "concurrency must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            transport,
            concurrency,
        })
    }

    /// Execute all requests, reporting each outcome to `observer`.
    ///
    /// Returns only once every submitted request has produced exactly one
    /// outcome. Per-item errors become `Failure` outcomes and never abort the
    /// batch. Completion order is not submission order.
    pub async fn run(
        &self,
        requests: Vec<TransferRequest>,
        observer: &dyn DownloadObserver,
    ) -> BatchReport {
        let outcomes = stream::iter(requests)
            .map(|request| self.run_one(request, observer))
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        BatchReport { outcomes }
    }

    async fn run_one(
        &self,
        request: TransferRequest,
        observer: &dyn DownloadObserver,
    ) -> TransferOutcome {
        let TransferRequest {
            source_url,
            destination,
        } = request;

        match self.transfer(&source_url, &destination).await {
            Ok(()) => {
                observer.on_success(&source_url, &destination);
                TransferOutcome::Success {
                    source_url,
                    destination,
                }
            }
            Err(cause) => {
                observer.on_failure(&source_url, &destination, &cause);
                TransferOutcome::Failure {
                    source_url,
                    destination,
                    cause,
                }
            }
        }
    }

    /// Stream one response body to its destination.
    ///
    /// A mid-stream failure may leave a partial file behind; no cleanup pass.
    async fn transfer(&self, source_url: &str, destination: &std::path::Path) -> Result<()> {
        tracing::debug!("Downloading {} to {}", source_url, destination.display());

        let mut stream = self.transport.fetch(source_url).await?;
        let mut file = File::create(destination).await?;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
        }

        file.flush().await?;

        Ok(())
    }
}
