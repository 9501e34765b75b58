//! Grouping of candidate subdomains under their wildcard zones.

use std::collections::HashSet;

use crate::domain::{is_valid_domain, label_count};

/// Candidates assigned to one wildcard zone, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneBucket {
    /// Wildcard zone
    pub zone: String,
    /// Candidates under `zone`
    pub subdomains: Vec<String>,
}

/// Result of [`group_subdomains`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneGroups {
    /// One bucket per distinct zone, most specific zone first. Buckets may be empty.
    pub buckets: Vec<ZoneBucket>,
    /// Valid candidates that matched no zone, in input order.
    pub leftovers: Vec<String>,
    /// Number of candidates dropped by the syntax check.
    pub invalid: usize,
}

/// Partitions `subdomains` into per-zone buckets and leftovers.
///
/// Zones are ranked by descending label count (ties keep input order), so a
/// candidate lands in its most specific enclosing zone: `a.b.example.com` goes
/// to `b.example.com` rather than `example.com`. A candidate belongs to a zone
/// when it ends with `"." + zone`; the zone name itself does not match.
///
/// Invalid candidates are counted and dropped. Duplicate candidates and
/// duplicate zones are kept once, so every candidate is in at most one place.
pub fn group_subdomains<W, S>(wildcards: &[W], subdomains: &[S]) -> ZoneGroups
where
    W: AsRef<str>,
    S: AsRef<str>,
{
    let mut seen_zones = HashSet::new();
    let mut zones: Vec<&str> = wildcards
        .iter()
        .map(AsRef::as_ref)
        .filter(|zone| seen_zones.insert(*zone))
        .collect();
    zones.sort_by_key(|zone| std::cmp::Reverse(label_count(zone)));

    let suffixes: Vec<String> = zones.iter().map(|zone| format!(".{zone}")).collect();
    let mut buckets: Vec<ZoneBucket> = zones
        .iter()
        .map(|zone| ZoneBucket {
            zone: zone.to_string(),
            subdomains: Vec::new(),
        })
        .collect();
    let mut leftovers = Vec::new();
    let mut invalid = 0;
    let mut seen_subdomains = HashSet::new();

    for subdomain in subdomains.iter().map(AsRef::as_ref) {
        if !is_valid_domain(subdomain) {
            log::debug!("Dropping invalid subdomain {subdomain:?}");
            invalid += 1;
            continue;
        }
        if !seen_subdomains.insert(subdomain) {
            continue;
        }

        match suffixes.iter().position(|suffix| subdomain.ends_with(suffix.as_str())) {
            Some(index) => {
                log::debug!(
                    "Subdomain {subdomain} grouped under wildcard {}",
                    buckets[index].zone
                );
                buckets[index].subdomains.push(subdomain.to_string());
            }
            None => leftovers.push(subdomain.to_string()),
        }
    }

    ZoneGroups {
        buckets,
        leftovers,
        invalid,
    }
}
