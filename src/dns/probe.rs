//! Fingerprint probes.
//!
//! A probe issues one DNS query for a name and reduces the answer section to a
//! [`Fingerprint`]. Probes never retry; callers decide what a failure means
//! (see [`RetryingProbe`](super::RetryingProbe) for an opt-in retry layer).

use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{Name, Record, RecordType};
use hickory_resolver::TokioAsyncResolver;

use super::Fingerprint;
use crate::error_handling::ProbeError;

/// Something that can turn a name into a [`Fingerprint`].
///
/// Implemented by [`DnsProbe`] for real lookups; tests substitute in-memory
/// probes so the engine runs without network access.
#[async_trait]
pub trait FingerprintProbe: Send + Sync {
    /// Queries `name` once and fingerprints the answer.
    ///
    /// # Errors
    ///
    /// Returns a [`ProbeError`] on timeout, transport failure or a non-success
    /// response code.
    async fn probe(&self, name: &str) -> Result<Fingerprint, ProbeError>;
}

#[async_trait]
impl<P: FingerprintProbe + ?Sized> FingerprintProbe for Arc<P> {
    async fn probe(&self, name: &str) -> Result<Fingerprint, ProbeError> {
        (**self).probe(name).await
    }
}

/// Probe backed by a hickory resolver pinned to a single upstream server.
///
/// The resolver is expected to come from
/// [`init_resolver`](crate::initialization::init_resolver): one upstream,
/// one second timeout, no retries, no cache.
///
/// The fingerprint covers every record hickory returns for the lookup, which
/// may include authority or additional records owned by the queried name.
#[derive(Clone)]
pub struct DnsProbe {
    resolver: Arc<TokioAsyncResolver>,
}

impl DnsProbe {
    /// Creates a probe that queries through `resolver`.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl FingerprintProbe for DnsProbe {
    async fn probe(&self, name: &str) -> Result<Fingerprint, ProbeError> {
        let query = query_name(name)?;

        let fingerprint = match self.resolver.lookup(query, RecordType::ANY).await {
            Ok(lookup) => fingerprint_records(lookup.records()),
            Err(e) => classify_failure(name, &e)?,
        };

        log::debug!("Obtained fingerprint for {name}: {fingerprint}");
        Ok(fingerprint)
    }
}

/// Parses `name` into a fully qualified query name.
///
/// Labels are taken as raw ASCII: `_` and other characters outside the
/// hostname grammar are sent as they are, without IDNA processing.
///
/// # Errors
///
/// Returns `ProbeError::Transport` if `name` cannot be encoded as a DNS name
/// (e.g. a label longer than 63 bytes).
pub fn query_name(name: &str) -> Result<Name, ProbeError> {
    let fqdn = if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    };
    Name::from_ascii(&fqdn).map_err(|e| ProbeError::Transport {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Normalizes one answer record to `"<class> <type> <rdata>"`.
///
/// Owner name and TTL are left out: the owner differs between the names being
/// compared and the TTL counts down between queries.
pub fn normalize_record(record: &Record) -> String {
    match record.data() {
        Some(rdata) => format!("{} {} {}", record.dns_class(), record.record_type(), rdata),
        None => format!("{} {}", record.dns_class(), record.record_type()),
    }
}

/// Fingerprints answer records in response order.
pub fn fingerprint_records(records: &[Record]) -> Fingerprint {
    Fingerprint::from_answers(records.iter().map(normalize_record))
}

/// Maps a resolver error onto the probe contract.
fn classify_failure(name: &str, error: &ResolveError) -> Result<Fingerprint, ProbeError> {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            classify_response_code(name, *response_code)
        }
        ResolveErrorKind::Timeout => Err(ProbeError::Timeout {
            name: name.to_string(),
        }),
        ResolveErrorKind::Proto(proto) if matches!(proto.kind(), ProtoErrorKind::Timeout) => {
            Err(ProbeError::Timeout {
                name: name.to_string(),
            })
        }
        _ => Err(ProbeError::Transport {
            name: name.to_string(),
            message: error.to_string(),
        }),
    }
}

/// A response without answer records.
///
/// NOERROR is still a successful query and yields the fingerprint of an empty
/// answer section; any other code is a failed probe.
fn classify_response_code(name: &str, code: ResponseCode) -> Result<Fingerprint, ProbeError> {
    if code == ResponseCode::NoError {
        Ok(fingerprint_records(&[]))
    } else {
        Err(ProbeError::ResponseCode {
            name: name.to_string(),
            code,
        })
    }
}
