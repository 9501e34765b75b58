//! Filter orchestration.
//!
//! Drives the pipeline: group candidates, then for each zone profile it and
//! validate its bucket, and finally merge in the leftovers when asked to.
//! Zones are handled one at a time; within a zone the bucket is validated
//! concurrently.

mod report;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use log::{info, warn};

use crate::config::Config;
use crate::dns::FingerprintProbe;
use crate::error_handling::{ErrorType, InfoType, ProcessingStats, ProfilingError, RunError};
use crate::wildcard::{
    group_subdomains, ResultCallback, ValidationPool, WildcardProfiler, ZoneBucket,
};

pub use report::{FilterReport, ZoneOutcome, ZoneStatus};

/// Wildcard zones and candidate subdomains to classify.
#[derive(Debug, Clone, Default)]
pub struct FilterInput {
    /// Wildcard zones, e.g. `example.com` for `*.example.com`
    pub wildcards: Vec<String>,
    /// Candidate subdomains
    pub subdomains: Vec<String>,
}

/// A configured filter run.
///
/// # Example
///
/// ```no_run
/// use wildsift::initialization::init_probe;
/// use wildsift::{Config, Filter, FilterInput};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::default();
/// let filter = Filter::new(config.clone(), init_probe(&config))?;
/// let report = filter
///     .run(&FilterInput {
///         wildcards: vec!["example.com".into()],
///         subdomains: vec!["www.example.com".into(), "random.example.com".into()],
///     })
///     .await?;
/// println!("{} unique", report.results.len());
/// # Ok(())
/// # }
/// ```
pub struct Filter {
    config: Config,
    probe: Arc<dyn FingerprintProbe>,
    stats: Arc<ProcessingStats>,
    on_result: Option<ResultCallback>,
}

impl Filter {
    /// Creates a filter that probes through `probe`.
    ///
    /// # Errors
    ///
    /// Returns `RunError::Config` if the configuration is unusable.
    pub fn new(config: Config, probe: Arc<dyn FingerprintProbe>) -> Result<Self, RunError> {
        config.validate()?;
        Ok(Self {
            config,
            probe,
            stats: Arc::new(ProcessingStats::new()),
            on_result: None,
        })
    }

    /// Registers a callback invoked for every result as soon as it is known.
    ///
    /// Unique subdomains are passed as their zone's validation confirms them.
    /// When `include_leftovers` is set, subdomains outside every wildcard zone
    /// are passed too, once all zones are done.
    pub fn with_result_callback(mut self, callback: ResultCallback) -> Self {
        self.on_result = Some(callback);
        self
    }

    /// Statistics collected by this filter's runs.
    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Classifies `input.subdomains` against `input.wildcards`.
    ///
    /// Zones whose profiling fails are skipped with a warning and contribute
    /// nothing; no zone or probe failure aborts the run.
    ///
    /// # Errors
    ///
    /// Returns `RunError::NoWildcards` or `RunError::NoSubdomains` for empty input.
    pub async fn run(&self, input: &FilterInput) -> Result<FilterReport, RunError> {
        if input.wildcards.is_empty() {
            return Err(RunError::NoWildcards);
        }
        if input.subdomains.is_empty() {
            return Err(RunError::NoSubdomains);
        }

        let start_time = Instant::now();

        info!("Grouping subdomains");
        let groups = group_subdomains(&input.wildcards, &input.subdomains);
        self.stats.add_errors(ErrorType::InvalidDomain, groups.invalid);
        info!(
            "{} zone(s), {} subdomain(s) outside any wildcard zone, {} invalid",
            groups.buckets.len(),
            groups.leftovers.len(),
            groups.invalid
        );

        let profiler = WildcardProfiler::new(
            Arc::clone(&self.probe),
            self.config.fingerprint_limit,
            Arc::clone(&self.stats),
        );
        let pool = ValidationPool::new(
            Arc::clone(&self.probe),
            self.config.concurrency,
            Arc::clone(&self.stats),
        )
        .with_result_callback(self.on_result.clone());

        let mut results = Vec::new();
        let mut zones = Vec::with_capacity(groups.buckets.len());
        for bucket in groups.buckets {
            let (outcome, unique) = self.process_zone(&profiler, &pool, bucket).await;
            zones.push(outcome);
            results.extend(unique);
        }

        let leftovers = groups.leftovers.len();
        if self.config.include_leftovers {
            info!("Including non-wildcard members in the output");
            self.stats.add_info(InfoType::LeftoverIncluded, leftovers);
            for leftover in &groups.leftovers {
                if let Some(callback) = &self.on_result {
                    callback(leftover);
                }
            }
            results.extend(groups.leftovers);
        }

        let mut seen = HashSet::new();
        results.retain(|subdomain| seen.insert(subdomain.clone()));

        Ok(FilterReport {
            results,
            zones,
            leftovers,
            leftovers_included: self.config.include_leftovers,
            invalid: groups.invalid,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

    async fn process_zone(
        &self,
        profiler: &WildcardProfiler,
        pool: &ValidationPool,
        bucket: ZoneBucket,
    ) -> (ZoneOutcome, Vec<String>) {
        let ZoneBucket { zone, subdomains } = bucket;
        let candidates = subdomains.len();

        if subdomains.is_empty() {
            warn!("No subdomains found for wildcard {zone}, skipping");
            let outcome = ZoneOutcome {
                zone,
                status: ZoneStatus::Empty,
                candidates,
                unique: 0,
                fingerprint: None,
            };
            return (outcome, Vec::new());
        }

        info!("Eliminating invalid {zone} instances ({candidates} candidate(s))");
        let profile = match profiler.profile(&zone).await {
            Ok(profile) => Arc::new(profile),
            Err(e) => {
                warn!("Unable to get common fingerprints for {zone}, skipping: {e}");
                self.stats.increment_error(e.error_type());
                let status = match e {
                    ProfilingError::Inconsistent { .. } => ZoneStatus::Inconsistent,
                    ProfilingError::Unobtainable { .. } => ZoneStatus::Unobtainable,
                };
                let outcome = ZoneOutcome {
                    zone,
                    status,
                    candidates,
                    unique: 0,
                    fingerprint: None,
                };
                return (outcome, Vec::new());
            }
        };

        let unique = pool.validate(Arc::clone(&profile), subdomains).await;
        info!("{zone}: {} of {candidates} unique", unique.len());

        let outcome = ZoneOutcome {
            zone,
            status: ZoneStatus::Validated,
            candidates,
            unique: unique.len(),
            fingerprint: Some(profile.fingerprint.to_string()),
        };
        (outcome, unique)
    }
}

/// Runs a filter against the configured upstream resolver.
///
/// Convenience wrapper around [`Filter`] with the probe from
/// [`init_probe`](crate::initialization::init_probe).
///
/// # Errors
///
/// See [`Filter::new`] and [`Filter::run`].
pub async fn run_filter(config: Config, input: &FilterInput) -> Result<FilterReport, RunError> {
    let probe = crate::initialization::init_probe(&config);
    Filter::new(config, probe)?.run(input).await
}
