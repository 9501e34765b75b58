//! Concurrent validation of a zone's bucket against its common fingerprint.
//!
//! Fan-out/fan-in: a producer feeds a bounded job queue, `concurrency` workers
//! probe candidates and send the unique ones to a shared result channel, and
//! the consumer drains that channel until the last worker has exited.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;

use super::ZoneProfile;
use crate::dns::FingerprintProbe;
use crate::error_handling::{InfoType, ProcessingStats};

/// Called with every unique subdomain as soon as it is confirmed.
pub type ResultCallback = Arc<dyn Fn(&str) + Send + Sync>;

type JobQueue = Arc<Mutex<mpsc::Receiver<String>>>;

/// Bounded worker pool that keeps the candidates whose fingerprint differs
/// from their zone's common fingerprint.
pub struct ValidationPool {
    probe: Arc<dyn FingerprintProbe>,
    concurrency: usize,
    stats: Arc<ProcessingStats>,
    on_unique: Option<ResultCallback>,
}

impl ValidationPool {
    /// # Arguments
    ///
    /// * `probe` - Probe used for every candidate
    /// * `concurrency` - Number of workers per bucket (at least one is always started)
    /// * `stats` - Shared run statistics
    pub fn new(
        probe: Arc<dyn FingerprintProbe>,
        concurrency: usize,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            probe,
            concurrency: concurrency.max(1),
            stats,
            on_unique: None,
        }
    }

    /// Registers a callback invoked for every unique subdomain.
    pub fn with_result_callback(mut self, callback: Option<ResultCallback>) -> Self {
        self.on_unique = callback;
        self
    }

    /// Probes every candidate of `bucket` and returns the unique ones.
    ///
    /// A candidate whose probe fails is dropped. A candidate whose fingerprint
    /// equals `profile.fingerprint` is wildcard noise and is dropped. The
    /// returned order is completion order, not input order.
    pub async fn validate(&self, profile: Arc<ZoneProfile>, bucket: Vec<String>) -> Vec<String> {
        let (job_tx, job_rx) = mpsc::channel::<String>(self.concurrency);
        let jobs: JobQueue = Arc::new(Mutex::new(job_rx));
        let (result_tx, mut result_rx) = mpsc::unbounded_channel::<String>();

        let mut workers = JoinSet::new();
        for worker_id in 0..self.concurrency {
            workers.spawn(run_worker(
                worker_id,
                Arc::clone(&self.probe),
                Arc::clone(&profile),
                Arc::clone(&jobs),
                result_tx.clone(),
                Arc::clone(&self.stats),
            ));
        }
        // Only workers hold result senders now; the channel closes when the last one exits
        drop(result_tx);
        drop(jobs);

        let producer = tokio::spawn(async move {
            for subdomain in bucket {
                if job_tx.send(subdomain).await.is_err() {
                    // Every worker is gone; nothing left to feed
                    break;
                }
            }
        });

        let mut unique = Vec::new();
        while let Some(subdomain) = result_rx.recv().await {
            if let Some(callback) = &self.on_unique {
                callback(&subdomain);
            }
            unique.push(subdomain);
        }

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                log::error!("Validation worker for {} failed: {e}", profile.zone);
            }
        }
        if let Err(e) = producer.await {
            log::error!("Job producer for {} failed: {e}", profile.zone);
        }

        unique
    }
}

async fn run_worker(
    worker_id: usize,
    probe: Arc<dyn FingerprintProbe>,
    profile: Arc<ZoneProfile>,
    jobs: JobQueue,
    results: mpsc::UnboundedSender<String>,
    stats: Arc<ProcessingStats>,
) {
    loop {
        let next = jobs.lock().await.recv().await;
        let Some(subdomain) = next else {
            break;
        };

        match probe.probe(&subdomain).await {
            Err(e) => {
                log::warn!("Unable to get {subdomain} fingerprint, continuing: {e}");
                stats.increment_error(e.error_type());
            }
            Ok(fingerprint) if fingerprint == profile.fingerprint => {
                log::trace!("[worker {worker_id}] {subdomain} matches the {} wildcard", profile.zone);
                stats.increment_info(InfoType::WildcardMatch);
            }
            Ok(fingerprint) => {
                log::debug!("Found unique subdomain: {subdomain} with fingerprint {fingerprint}");
                stats.increment_info(InfoType::UniqueSubdomain);
                if results.send(subdomain).is_err() {
                    break;
                }
            }
        }
    }
}
