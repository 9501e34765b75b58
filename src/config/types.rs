//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::config::constants::{DEFAULT_CONCURRENCY, DEFAULT_FINGERPRINT_LIMIT, DEFAULT_RESOLVER};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Format of the results file written with `--output`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One subdomain per line
    Plain,
    /// The full filter report as a JSON document
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Every component receives the values it needs from this struct at
/// construction time; nothing reads process-wide state. Logging is set up by
/// the binary from [`Opt`] before a filter is built.
///
/// # Examples
///
/// ```no_run
/// use wildsift::Config;
///
/// let config = Config {
///     concurrency: 10,
///     include_leftovers: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Probe workers per wildcard zone
    pub concurrency: usize,

    /// Synthetic names probed to derive a zone's common fingerprint
    pub fingerprint_limit: usize,

    /// Append subdomains that matched no wildcard zone to the results
    pub include_leftovers: bool,

    /// Upstream DNS resolver
    pub resolver: SocketAddr,

    /// Extra attempts per failed probe (0 = probe failures are final)
    pub probe_retries: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            fingerprint_limit: DEFAULT_FINGERPRINT_LIMIT,
            include_leftovers: false,
            resolver: SocketAddr::from(([8, 8, 8, 8], 53)),
            probe_retries: 0,
        }
    }
}

impl Config {
    /// Rejects values the engine cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroConcurrency` or `ConfigError::ZeroFingerprintLimit`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if self.fingerprint_limit == 0 {
            return Err(ConfigError::ZeroFingerprintLimit);
        }
        Ok(())
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// wildsift -w wildcards.txt -s subdomains.txt
///
/// # More workers, keep subdomains outside any wildcard zone, save results
/// wildsift -w wildcards.txt -s subdomains.txt -c 20 --inwm -o unique.txt
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "wildsift",
    version,
    about = "Eliminates common wildcard instances and returns unique ones."
)]
pub struct Opt {
    /// Wildcards file path
    #[arg(short = 'w', long, value_parser)]
    pub wildcards: PathBuf,

    /// Subdomains file path
    #[arg(short = 's', long, value_parser)]
    pub subdomains: PathBuf,

    /// Max concurrency (probe workers per wildcard zone)
    #[arg(short = 'c', long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Limit for common fingerprints to be generated per wildcard zone
    #[arg(
        long = "common-fingerprints-limit",
        visible_alias = "cfl",
        default_value_t = DEFAULT_FINGERPRINT_LIMIT
    )]
    pub common_fingerprints_limit: usize,

    /// Output file path to save results
    #[arg(short = 'o', long, value_parser)]
    pub output: Option<PathBuf>,

    /// Output file format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output_format: OutputFormat,

    /// Include non-wildcard members in the output
    #[arg(long = "include-non-wildcard-members", visible_alias = "inwm")]
    pub include_non_wildcard_members: bool,

    /// Upstream DNS resolver address
    #[arg(long, default_value = DEFAULT_RESOLVER)]
    pub resolver: SocketAddr,

    /// Extra attempts for a failed probe (0 disables retrying)
    #[arg(long, default_value_t = 0)]
    pub probe_retries: usize,

    /// Enable verbose output (same as --log-level debug)
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode (no logging, no banner)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Opt {
    /// Level the logger is initialized with; `--quiet` and `--verbose` win over `--log-level`.
    pub fn effective_log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Off
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            self.log_level.clone().into()
        }
    }
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Self {
            concurrency: opt.concurrency,
            fingerprint_limit: opt.common_fingerprints_limit,
            include_leftovers: opt.include_non_wildcard_members,
            resolver: opt.resolver,
            probe_retries: opt.probe_retries,
        }
    }
}
