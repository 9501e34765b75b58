// Shared test helpers: an in-memory DNS probe and input builders.
//
// The probe models a small DNS world. Explicit records answer for exact names,
// wildcard zones answer for any other name beneath them, and anything else is
// a failure. No network access is needed.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use wildsift::{Fingerprint, FingerprintProbe, FilterInput, ProbeError};

/// How a wildcard zone answers names that have no explicit record.
#[derive(Clone)]
#[allow(dead_code)] // Not every test file uses every behavior
pub enum ZoneBehavior {
    /// Always the same answer
    Stable(Vec<String>),
    /// A different answer on every query (e.g. round-robin load balancers)
    Rotating,
    /// Every query times out
    Dead,
}

/// In-memory probe with per-name and per-zone answers.
#[derive(Default)]
pub struct FakeDns {
    records: HashMap<String, Vec<String>>,
    zones: Vec<(String, ZoneBehavior)>,
    failing: HashSet<String>,
    delay: Option<Duration>,
    rotation: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
    queried: Mutex<Vec<String>>,
}

#[allow(dead_code)] // Used by other test files
impl FakeDns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `name` with `answers`, overriding any wildcard.
    pub fn record(mut self, name: &str, answers: &[&str]) -> Self {
        self.records.insert(
            name.to_string(),
            answers.iter().map(|a| a.to_string()).collect(),
        );
        self
    }

    /// Makes `zone` a wildcard zone answering with `answers`.
    pub fn wildcard(self, zone: &str, answers: &[&str]) -> Self {
        let answers = answers.iter().map(|a| a.to_string()).collect();
        self.zone(zone, ZoneBehavior::Stable(answers))
    }

    pub fn zone(mut self, zone: &str, behavior: ZoneBehavior) -> Self {
        self.zones.push((zone.to_string(), behavior));
        self
    }

    /// Makes queries for `name` fail.
    pub fn failing(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// Delays every answer, so concurrent queries overlap.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Highest number of queries observed in flight at once.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    /// Every name queried so far.
    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }

    fn answer(&self, name: &str) -> Result<Fingerprint, ProbeError> {
        if self.failing.contains(name) {
            return Err(ProbeError::Transport {
                name: name.to_string(),
                message: "connection refused".to_string(),
            });
        }
        if let Some(answers) = self.records.get(name) {
            return Ok(Fingerprint::from_answers(answers));
        }

        // Most specific zone wins, like a real delegation
        let zone = self
            .zones
            .iter()
            .filter(|(zone, _)| name.ends_with(&format!(".{zone}")))
            .max_by_key(|(zone, _)| zone.len());

        match zone {
            Some((_, ZoneBehavior::Stable(answers))) => Ok(Fingerprint::from_answers(answers)),
            Some((_, ZoneBehavior::Rotating)) => {
                let n = self.rotation.fetch_add(1, Ordering::SeqCst);
                Ok(Fingerprint::from_answers([format!("IN A 10.0.0.{}", n % 250)]))
            }
            Some((_, ZoneBehavior::Dead)) => Err(ProbeError::Timeout {
                name: name.to_string(),
            }),
            None => Err(ProbeError::Transport {
                name: name.to_string(),
                message: "no such name".to_string(),
            }),
        }
    }
}

#[async_trait]
impl FingerprintProbe for FakeDns {
    async fn probe(&self, name: &str) -> Result<Fingerprint, ProbeError> {
        self.queried.lock().unwrap().push(name.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        } else {
            tokio::task::yield_now().await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.answer(name)
    }
}

/// Builds a `FilterInput` from string slices.
#[allow(dead_code)] // Used by other test files
pub fn input(wildcards: &[&str], subdomains: &[&str]) -> FilterInput {
    FilterInput {
        wildcards: wildcards.iter().map(|s| s.to_string()).collect(),
        subdomains: subdomains.iter().map(|s| s.to_string()).collect(),
    }
}

/// Sorts results so assertions do not depend on completion order.
#[allow(dead_code)] // Used by other test files
pub fn sorted(mut results: Vec<String>) -> Vec<String> {
    results.sort();
    results
}
