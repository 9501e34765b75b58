//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats};
use crate::run::{FilterReport, ZoneStatus};

/// Logs a one-line summary of a finished run plus the skipped zones.
pub fn print_run_summary(report: &FilterReport) {
    let validated = report
        .zones
        .iter()
        .filter(|zone| zone.status == ZoneStatus::Validated)
        .count();
    info!(
        "Found {} unique subdomain(s) across {} of {} wildcard zone(s) in {:.1}s",
        report.results.len(),
        validated,
        report.zones.len(),
        report.elapsed_seconds
    );

    let skipped: Vec<_> = report.skipped_zones().collect();
    if !skipped.is_empty() {
        info!("Skipped zones ({}):", skipped.len());
        for zone in skipped {
            info!("   {}: {}", zone.zone, zone.status.as_str());
        }
    }
}

/// Prints error and info statistics to the log.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    let total_info = error_stats.total_info();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = error_stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = error_stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}
