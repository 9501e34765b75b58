//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, resolver address)
//! - The library `Config` and the CLI option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt, OutputFormat};
