//! Wildcard zone profiling.
//!
//! A zone's common fingerprint is derived by probing names that cannot exist
//! (a long random label under the zone). If the zone is a uniform wildcard every
//! such probe yields the same fingerprint.

use std::sync::Arc;

use rand::Rng;

use crate::config::{RANDOM_LABEL_CHARSET, RANDOM_LABEL_LENGTH};
use crate::dns::{Fingerprint, FingerprintProbe};
use crate::error_handling::{InfoType, ProcessingStats, ProfilingError};

/// A wildcard zone paired with the fingerprint every name under it resolves to.
///
/// Read-only once built; shared by all validation workers of the zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneProfile {
    /// Wildcard zone
    pub zone: String,
    /// Fingerprint of any name under `zone` that has no records of its own
    pub fingerprint: Fingerprint,
}

/// Generates a random label of `RANDOM_LABEL_LENGTH` characters.
pub fn random_label() -> String {
    let mut rng = rand::rng();
    (0..RANDOM_LABEL_LENGTH)
        .map(|_| RANDOM_LABEL_CHARSET[rng.random_range(0..RANDOM_LABEL_CHARSET.len())] as char)
        .collect()
}

/// Derives common fingerprints for wildcard zones.
pub struct WildcardProfiler {
    probe: Arc<dyn FingerprintProbe>,
    limit: usize,
    stats: Arc<ProcessingStats>,
}

impl WildcardProfiler {
    /// # Arguments
    ///
    /// * `probe` - Probe used for the synthetic names
    /// * `limit` - Number of synthetic names probed per zone
    /// * `stats` - Shared run statistics
    pub fn new(probe: Arc<dyn FingerprintProbe>, limit: usize, stats: Arc<ProcessingStats>) -> Self {
        Self {
            probe,
            limit,
            stats,
        }
    }

    /// Profiles `zone` with `limit` sequential probes of `<random>.<zone>`.
    ///
    /// The first successful fingerprint becomes the common one; every later
    /// success must equal it. Failed probes are logged and skipped.
    ///
    /// # Errors
    ///
    /// - `ProfilingError::Inconsistent` as soon as two fingerprints differ
    /// - `ProfilingError::Unobtainable` if no probe succeeded
    pub async fn profile(&self, zone: &str) -> Result<ZoneProfile, ProfilingError> {
        let mut common: Option<Fingerprint> = None;

        for _ in 0..self.limit {
            let name = format!("{}.{zone}", random_label());
            let fingerprint = match self.probe.probe(&name).await {
                Ok(fingerprint) => fingerprint,
                Err(e) => {
                    log::warn!("Unable to get {name} fingerprint, reason: {e}, continuing");
                    self.stats.increment_error(e.error_type());
                    continue;
                }
            };

            match common {
                None => common = Some(fingerprint),
                Some(expected) if expected != fingerprint => {
                    log::debug!("{zone}: expected {expected}, got {fingerprint} for {name}");
                    return Err(ProfilingError::Inconsistent {
                        zone: zone.to_string(),
                    });
                }
                Some(_) => {}
            }
        }

        let fingerprint = common.ok_or_else(|| ProfilingError::Unobtainable {
            zone: zone.to_string(),
            attempts: self.limit,
        })?;

        self.stats.increment_info(InfoType::ZoneProfiled);
        log::debug!("Common fingerprint for {zone}: {fingerprint}");
        Ok(ZoneProfile {
            zone: zone.to_string(),
            fingerprint,
        })
    }
}
