//! DNS probing and answer fingerprinting.
//!
//! This module provides the `FingerprintProbe` abstraction used by the
//! wildcard engine:
//! - `Fingerprint` - digest of a response's normalized answer records
//! - `DnsProbe` - one ANY query against the configured upstream resolver
//! - `RetryingProbe` - optional retry decorator around any probe

mod fingerprint;
mod probe;
mod retry;

// Re-export public API
pub use fingerprint::Fingerprint;
pub use probe::{fingerprint_records, normalize_record, query_name, DnsProbe, FingerprintProbe};
pub use retry::{get_retry_strategy, RetryingProbe};
