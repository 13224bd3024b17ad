//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - The progress bar observer
//! - Search result tables

pub mod console;
pub mod progress;
pub mod table;

pub use console::{print_error, print_info, print_success, print_warning};
pub use progress::ProgressBarObserver;
pub use table::format_creators;
