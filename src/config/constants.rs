//! Configuration constants.
//!
//! This module defines the defaults used throughout the application,
//! including DNS timeouts, worker counts and the synthetic label alphabet.

use std::time::Duration;

/// Default number of concurrent probe workers per wildcard zone
pub const DEFAULT_CONCURRENCY: usize = 3;

/// Default number of synthetic names probed when profiling a wildcard zone
pub const DEFAULT_FINGERPRINT_LIMIT: usize = 7;

// Network
/// Upstream resolver every probe is sent to
pub const DEFAULT_RESOLVER: &str = "8.8.8.8:53";
/// Per-query DNS timeout; a query without an answer by then is a failed probe
pub const DNS_TIMEOUT: Duration = Duration::from_secs(1);

// Synthetic names
/// Length of the random label prefixed to a zone while profiling it
pub const RANDOM_LABEL_LENGTH: usize = 60;
/// Alphabet the random label is drawn from
pub const RANDOM_LABEL_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_";

// Retry strategy (only used when --probe-retries > 0)
/// Initial delay in milliseconds before first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 100;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 2;
