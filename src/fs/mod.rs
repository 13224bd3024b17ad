//! Filesystem module.
//!
//! Provides filename sanitization for server-supplied display names.

pub mod naming;

pub use naming::sanitize_filename;
