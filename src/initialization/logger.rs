//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.
//! Log output goes to stderr so that stdout carries nothing but results.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it. `LevelFilter::Off`
/// silences everything (quiet mode).
///
/// # Arguments
///
/// * `level` - Minimum log level to display (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Json)
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=wildsift=debug wildsift -w wildcards.txt -s subdomains.txt
///
/// # Override with CLI args (takes precedence)
/// RUST_LOG=debug wildsift -w wildcards.txt -s subdomains.txt --log-level info
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // hickory logs every malformed or truncated UDP answer; probe errors are reported by us
    builder.filter_module("hickory_proto", LevelFilter::Error.min(level));
    builder.filter_module("hickory_resolver", LevelFilter::Error.min(level));
    builder.filter_module("wildsift", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    json_line(
                        chrono::Utc::now().timestamp_millis(),
                        record.level(),
                        record.target(),
                        &record.args().to_string(),
                    )
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "[{}] {} {}",
                    colored_level,
                    record.target().cyan(),
                    record.args()
                )
            });
        }
    }

    // try_init() rather than init(): tests may initialize more than once
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// One JSON log object; `target` and `msg` are escaped.
fn json_line(ts: i64, level: log::Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts,
        "level": level.to_string(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}
