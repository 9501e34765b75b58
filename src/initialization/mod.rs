//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger
//! - DNS resolver (and the probe built on top of it)

mod logger;
mod resolver;

use std::sync::Arc;

use crate::config::Config;
use crate::dns::{DnsProbe, FingerprintProbe, RetryingProbe};

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes the probe used by the engine.
///
/// Builds a [`DnsProbe`] against `config.resolver` and wraps it in a
/// [`RetryingProbe`] only when `config.probe_retries` is non-zero.
pub fn init_probe(config: &Config) -> Arc<dyn FingerprintProbe> {
    let probe = DnsProbe::new(init_resolver(config.resolver));
    if config.probe_retries > 0 {
        log::info!(
            "Retrying failed probes up to {} time(s)",
            config.probe_retries
        );
        Arc::new(RetryingProbe::new(probe, config.probe_retries))
    } else {
        Arc::new(probe)
    }
}
