//! DNS resolver initialization.
//!
//! This module builds the resolver every probe goes through: a single upstream
//! server, a short timeout and no retries or caching, so that each probe is
//! exactly one query.

use std::net::SocketAddr;
use std::sync::Arc;

use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver used for fingerprint probes.
///
/// # Arguments
///
/// * `upstream` - Resolver every query is sent to (recursion desired)
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across workers.
pub fn init_resolver(upstream: SocketAddr) -> Arc<TokioAsyncResolver> {
    let (config, opts) = resolver_config(upstream);
    Arc::new(TokioAsyncResolver::tokio(config, opts))
}

fn resolver_config(upstream: SocketAddr) -> (ResolverConfig, ResolverOpts) {
    let config = ResolverConfig::from_parts(
        None,
        vec![],
        vec![NameServerConfig::new(upstream, Protocol::Udp)],
    );

    let mut opts = ResolverOpts::default();
    opts.timeout = crate::config::DNS_TIMEOUT;
    // Retries belong to the caller (see RetryingProbe)
    opts.attempts = 0;
    // Every answer must come from the upstream, never from an earlier probe
    opts.cache_size = 0;
    // Names are always fully qualified; never append search domains
    opts.ndots = 0;
    opts.use_hosts_file = false;
    // ANY answers are often larger than 512 bytes
    opts.edns0 = true;

    (config, opts)
}
