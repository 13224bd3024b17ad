//! Download module: the concurrent transfer engine and its collaborators.
//!
//! This module provides:
//! - The bounded-concurrency download engine
//! - The transport seam over the network
//! - The per-transfer observer contract
//! - Transfer-batch construction from catalog posts

pub mod batch;
pub mod engine;
pub mod observer;
pub mod transport;

pub use batch::{build_transfer_requests, collect_file_refs};
pub use engine::{BatchReport, DownloadEngine, TransferOutcome, TransferRequest};
pub use observer::{DownloadObserver, NoOpObserver};
pub use transport::{ByteStream, HttpTransport, Transport};
