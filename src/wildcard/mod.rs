//! Wildcard elimination engine.
//!
//! - `group_subdomains` - assigns candidates to their most specific wildcard zone
//! - `WildcardProfiler` - derives a zone's common fingerprint from random names
//! - `ValidationPool` - keeps the candidates that do not resolve like the wildcard

mod grouping;
mod pool;
mod profile;

// Re-export public API
pub use grouping::{group_subdomains, ZoneBucket, ZoneGroups};
pub use pool::{ResultCallback, ValidationPool};
pub use profile::{random_label, WildcardProfiler, ZoneProfile};
