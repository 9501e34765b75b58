//! Error type definitions.
//!
//! This module defines all error and info types used throughout the application.

use std::path::PathBuf;

use hickory_resolver::proto::op::ResponseCode;
use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Invalid engine configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A pool needs at least one worker.
    #[error("concurrency must be at least 1")]
    ZeroConcurrency,

    /// Profiling needs at least one synthetic probe.
    #[error("common fingerprints limit must be at least 1")]
    ZeroFingerprintLimit,
}

/// Errors reading the wildcard and subdomain lists.
#[derive(Error, Debug)]
pub enum InputError {
    /// The path does not exist or is not a regular file.
    #[error("{} doesn't exist or is not a file", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// A single DNS probe that produced no fingerprint.
///
/// Probe failures are never fatal: the caller logs them and excludes the name
/// from whatever decision depended on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// No response within the per-query timeout.
    #[error("DNS query timed out for {name}")]
    Timeout {
        /// Queried name
        name: String,
    },

    /// The resolver answered with a non-success response code.
    #[error("DNS query failed for {name} with response code {code}")]
    ResponseCode {
        /// Queried name
        name: String,
        /// Response code returned by the resolver
        code: ResponseCode,
    },

    /// Any other transport or protocol failure.
    #[error("DNS query failed for {name}: {message}")]
    Transport {
        /// Queried name
        name: String,
        /// Description of the failure
        message: String,
    },
}

impl ProbeError {
    /// Statistics bucket for this failure.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ProbeError::Timeout { .. } => ErrorType::ProbeTimeout,
            ProbeError::ResponseCode { .. } => ErrorType::ProbeResponseCode,
            ProbeError::Transport { .. } => ErrorType::ProbeTransport,
        }
    }
}

/// A wildcard zone whose common fingerprint could not be established.
///
/// Either way the zone is skipped and its bucket contributes no results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfilingError {
    /// Two synthetic probes returned different fingerprints.
    #[error("inconsistent fingerprints detected for {zone}")]
    Inconsistent {
        /// Wildcard zone being profiled
        zone: String,
    },

    /// Every synthetic probe failed.
    #[error("unable to obtain any fingerprints for {zone} after {attempts} attempts")]
    Unobtainable {
        /// Wildcard zone being profiled
        zone: String,
        /// Number of probes attempted
        attempts: usize,
    },
}

impl ProfilingError {
    /// Statistics bucket for this failure.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ProfilingError::Inconsistent { .. } => ErrorType::ProfilingInconsistent,
            ProfilingError::Unobtainable { .. } => ErrorType::ProfilingUnobtainable,
        }
    }
}

/// Errors that abort a whole filter run.
#[derive(Error, Debug)]
pub enum RunError {
    /// The wildcard list is empty.
    #[error("no wildcards supplied")]
    NoWildcards,

    /// The subdomain list is empty.
    #[error("no subdomains supplied")]
    NoSubdomains,

    /// The configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Types of errors counted during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Probe failures
    /// No answer within the DNS timeout
    ProbeTimeout,
    /// Answer carried a non-success response code
    ProbeResponseCode,
    /// Any other query failure
    ProbeTransport,
    // Zone profiling failures
    /// Synthetic names of a zone resolved differently
    ProfilingInconsistent,
    /// No synthetic name of a zone resolved
    ProfilingUnobtainable,
    // Input
    /// Candidate failed the syntax check
    InvalidDomain,
}

/// Types of informational metrics counted during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// Common fingerprint established for a zone
    ZoneProfiled,
    /// Candidate kept as unique
    UniqueSubdomain,
    /// Candidate dropped as a wildcard instance
    WildcardMatch,
    /// Candidate outside every zone added to the results
    LeftoverIncluded,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Human-readable label used in the statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::ProbeTimeout => "DNS probe timeout",
            ErrorType::ProbeResponseCode => "DNS probe error response code",
            ErrorType::ProbeTransport => "DNS probe transport error",
            ErrorType::ProfilingInconsistent => "Zone skipped (inconsistent fingerprints)",
            ErrorType::ProfilingUnobtainable => "Zone skipped (no fingerprint obtainable)",
            ErrorType::InvalidDomain => "Invalid subdomain dropped",
        }
    }
}

impl std::fmt::Display for InfoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InfoType {
    /// Human-readable label used in the statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::ZoneProfiled => "Wildcard zone profiled",
            InfoType::UniqueSubdomain => "Unique subdomain found",
            InfoType::WildcardMatch => "Wildcard instance eliminated",
            InfoType::LeftoverIncluded => "Non-wildcard member included",
        }
    }
}
