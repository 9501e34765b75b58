//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, input, probe, profiling, run)
//! - Processing statistics tracking (error and info counters)
//!
//! Nothing that happens inside the filtering engine is fatal: probe and
//! profiling failures are counted here and the run carries on.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{
    ConfigError, ErrorType, InfoType, InitializationError, InputError, ProbeError, ProfilingError,
    RunError,
};
