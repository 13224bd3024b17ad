//! Catalog API module.
//!
//! Provides:
//! - The HTTP client for the party catalog endpoints
//! - Response type definitions

pub mod client;
pub mod types;

pub use client::PartyClient;
pub use types::{CreatorRecord, FileRef, PostRecord};
