//! party-downloader - download creator content from party archive sites.
//!
//! This library fetches post metadata from a party archive's catalog API
//! (coomer.su / kemono.su style) and downloads the referenced files with a
//! bounded degree of concurrency.
//!
//! # Features
//!
//! - Fetch all posts of a creator from the catalog API
//! - Concurrent downloads with a fixed in-flight limit
//! - Per-file success/failure reporting through an observer
//! - Failure isolation: one failed transfer never aborts the batch
//! - Creator search against the site's creators index
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use party_downloader::download::{
//!     DownloadEngine, HttpTransport, NoOpObserver, TransferRequest,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = DownloadEngine::new(HttpTransport::new()?, 5)?;
//!     let requests = vec![TransferRequest {
//!         source_url: "https://coomer.su/data/aa/bb/file.jpg".to_string(),
//!         destination: PathBuf::from("file.jpg"),
//!     }];
//!
//!     let report = engine.run(requests, &NoOpObserver).await;
//!     println!("{} downloaded, {} failed", report.success_count(), report.failure_count());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use api::{CreatorRecord, FileRef, PartyClient, PostRecord};
pub use download::{
    BatchReport, DownloadEngine, DownloadObserver, HttpTransport, NoOpObserver, TransferOutcome,
    TransferRequest, Transport,
};
pub use error::{Error, Result};
