//! Filter run results.

use serde::Serialize;

/// What happened to one wildcard zone during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneStatus {
    /// Profiled and its bucket validated
    Validated,
    /// No candidate fell under the zone; nothing was probed
    Empty,
    /// Skipped: synthetic probes disagreed
    Inconsistent,
    /// Skipped: no synthetic probe succeeded
    Unobtainable,
}

impl ZoneStatus {
    /// Returns the status name as it appears in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneStatus::Validated => "validated",
            ZoneStatus::Empty => "empty",
            ZoneStatus::Inconsistent => "inconsistent",
            ZoneStatus::Unobtainable => "unobtainable",
        }
    }
}

/// Per-zone summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneOutcome {
    /// Wildcard zone as given in the input
    pub zone: String,
    /// What happened to the zone
    pub status: ZoneStatus,
    /// Candidates grouped under the zone
    pub candidates: usize,
    /// Candidates kept as unique
    pub unique: usize,
    /// Hex common fingerprint, when profiling succeeded
    pub fingerprint: Option<String>,
}

/// Results of a filter run.
#[derive(Debug, Clone, Serialize)]
pub struct FilterReport {
    /// Unique subdomains (plus leftovers when included), without duplicates.
    /// Order carries no meaning.
    pub results: Vec<String>,
    /// One entry per distinct wildcard zone, most specific first
    pub zones: Vec<ZoneOutcome>,
    /// Valid subdomains that matched no wildcard zone
    pub leftovers: usize,
    /// Whether the leftovers are part of `results`
    pub leftovers_included: bool,
    /// Subdomains dropped by the syntax check
    pub invalid: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl FilterReport {
    /// Zones that were skipped because profiling failed.
    pub fn skipped_zones(&self) -> impl Iterator<Item = &ZoneOutcome> {
        self.zones.iter().filter(|z| {
            matches!(
                z.status,
                ZoneStatus::Inconsistent | ZoneStatus::Unobtainable
            )
        })
    }
}
