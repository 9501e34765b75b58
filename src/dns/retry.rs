//! Opt-in retry layer for probes.

use std::time::Duration;

use async_trait::async_trait;
use tokio_retry::strategy::ExponentialBackoff;
use tokio_retry::Retry;

use super::{Fingerprint, FingerprintProbe};
use crate::error_handling::ProbeError;

/// Creates the exponential backoff used between probe attempts.
///
/// - Initial delay: `RETRY_INITIAL_DELAY_MS` milliseconds
/// - Backoff factor: `RETRY_FACTOR`
/// - Maximum delay: `RETRY_MAX_DELAY_SECS` seconds
/// - At most `retries` delays (one per extra attempt)
pub fn get_retry_strategy(retries: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(crate::config::RETRY_INITIAL_DELAY_MS)
        .factor(crate::config::RETRY_FACTOR)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
        .take(retries)
}

/// Decorator that retries a failing probe up to `retries` extra times.
///
/// The wrapped probe keeps its single-query contract; only the last error is
/// reported when every attempt fails.
pub struct RetryingProbe<P> {
    inner: P,
    retries: usize,
}

impl<P: FingerprintProbe> RetryingProbe<P> {
    /// Wraps `inner`; `retries == 0` makes this a pass-through.
    pub fn new(inner: P, retries: usize) -> Self {
        Self { inner, retries }
    }
}

#[async_trait]
impl<P: FingerprintProbe> FingerprintProbe for RetryingProbe<P> {
    async fn probe(&self, name: &str) -> Result<Fingerprint, ProbeError> {
        Retry::start(get_retry_strategy(self.retries), || async move {
            let result = self.inner.probe(name).await;
            if let Err(e) = &result {
                log::debug!("Probe attempt failed: {e}");
            }
            result
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fails `failures` times, then answers.
    struct FlakyProbe {
        calls: AtomicUsize,
        failures: usize,
    }

    #[async_trait]
    impl FingerprintProbe for FlakyProbe {
        async fn probe(&self, name: &str) -> Result<Fingerprint, ProbeError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err(ProbeError::Timeout {
                    name: name.to_string(),
                })
            } else {
                Ok(Fingerprint::from_answers(["IN A 192.0.2.1"]))
            }
        }
    }

    #[test]
    fn test_retry_strategy_is_bounded() {
        assert_eq!(get_retry_strategy(0).count(), 0);
        assert_eq!(get_retry_strategy(3).count(), 3);
        assert!(get_retry_strategy(10)
            .all(|d| d <= Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS)));
    }

    #[tokio::test]
    async fn test_retrying_probe_recovers_from_transient_failures() {
        let probe = RetryingProbe::new(
            FlakyProbe {
                calls: AtomicUsize::new(0),
                failures: 2,
            },
            2,
        );
        assert!(probe.probe("a.example.com").await.is_ok());
        assert_eq!(probe.inner.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retrying_probe_gives_up_after_retries() {
        let probe = RetryingProbe::new(
            FlakyProbe {
                calls: AtomicUsize::new(0),
                failures: usize::MAX,
            },
            1,
        );
        let err = probe.probe("a.example.com").await.unwrap_err();
        assert!(matches!(err, ProbeError::Timeout { .. }));
        assert_eq!(probe.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_zero_retries_is_a_single_attempt() {
        let probe = RetryingProbe::new(
            FlakyProbe {
                calls: AtomicUsize::new(0),
                failures: 1,
            },
            0,
        );
        assert!(probe.probe("a.example.com").await.is_err());
        assert_eq!(probe.inner.calls.load(Ordering::SeqCst), 1);
    }
}
