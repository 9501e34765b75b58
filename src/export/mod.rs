//! Export of filter results.
//!
//! Writes a run's results to a file, either one subdomain per line or as the
//! full report in JSON. Existing files are truncated.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncWriteExt;

use crate::config::OutputFormat;
use crate::run::FilterReport;

/// Renders `report` in `format`.
pub fn render_results(report: &FilterReport, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Plain => {
            let mut output = String::new();
            for subdomain in &report.results {
                output.push_str(subdomain);
                output.push('\n');
            }
            Ok(output.into_bytes())
        }
        OutputFormat::Json => {
            let mut output =
                serde_json::to_vec_pretty(report).context("Failed to serialize report")?;
            output.push(b'\n');
            Ok(output)
        }
    }
}

/// Writes `report` to `path`.
///
/// # Returns
///
/// The number of results written.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub async fn export_results(
    report: &FilterReport,
    path: &Path,
    format: OutputFormat,
) -> Result<usize> {
    let output = render_results(report, format)?;

    let mut file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("Unable to create {}", path.display()))?;
    file.write_all(&output)
        .await
        .with_context(|| format!("Unable to save results to {}", path.display()))?;
    file.flush().await?;

    Ok(report.results.len())
}
