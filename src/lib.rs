//! wildsift library: wildcard DNS subdomain filtering
//!
//! Given a list of wildcard zones and a list of candidate subdomains, this
//! library keeps the candidates whose DNS answers differ from what the zone's
//! wildcard record returns for an arbitrary name. Everything else is a wildcard
//! artifact and is dropped.
//!
//! # Example
//!
//! ```no_run
//! use wildsift::{run_filter, Config, FilterInput};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     concurrency: 10,
//!     ..Default::default()
//! };
//! let input = FilterInput {
//!     wildcards: vec!["example.com".into()],
//!     subdomains: vec!["www.example.com".into(), "abc.example.com".into()],
//! };
//!
//! let report = run_filter(config, &input).await?;
//! for subdomain in &report.results {
//!     println!("{subdomain}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod dns;
pub mod domain;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod input;
mod run;
pub mod wildcard;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use dns::{DnsProbe, Fingerprint, FingerprintProbe, RetryingProbe};
pub use error_handling::{ProbeError, ProcessingStats, RunError};
pub use run::{run_filter, Filter, FilterInput, FilterReport, ZoneOutcome, ZoneStatus};
pub use wildcard::ResultCallback;
