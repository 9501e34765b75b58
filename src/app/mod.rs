//! Main application modules.
//!
//! This module provides the startup banner and statistics printing used by the
//! main application.

pub mod banner;
pub mod statistics;

// Re-export public API
pub use banner::{banner_text, print_banner};
pub use statistics::{print_error_statistics, print_run_summary};
