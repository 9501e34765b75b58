//! End-to-end filter runs against an in-memory DNS world.

mod helpers;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use helpers::{input, sorted, FakeDns, ZoneBehavior};
use wildsift::error_handling::ErrorType;
use wildsift::{Config, Filter, ResultCallback, RunError, ZoneStatus};

const WILDCARD_A: &str = "IN A 192.0.2.1";

fn config() -> Config {
    Config {
        concurrency: 4,
        fingerprint_limit: 5,
        ..Default::default()
    }
}

fn example_world() -> Arc<FakeDns> {
    FakeDns::new()
        .wildcard("example.com", &[WILDCARD_A])
        .record("a.example.com", &[WILDCARD_A])
        .record("b.example.com", &["IN A 198.51.100.7"])
        .record("other.net", &["IN A 203.0.113.9"])
        .into_arc()
}

#[tokio::test]
async fn test_wildcard_instances_are_dropped() {
    let dns = example_world();
    let filter = Filter::new(config(), dns.clone()).unwrap();

    let report = filter
        .run(&input(
            &["example.com"],
            &["a.example.com", "b.example.com", "other.net"],
        ))
        .await
        .unwrap();

    assert_eq!(report.results, ["b.example.com"]);
    assert_eq!(report.leftovers, 1);
    assert!(!report.leftovers_included);
    assert_eq!(report.zones.len(), 1);
    assert_eq!(report.zones[0].status, ZoneStatus::Validated);
    assert_eq!(report.zones[0].candidates, 2);
    assert_eq!(report.zones[0].unique, 1);
    // Leftovers are never probed
    assert!(!dns.queried().iter().any(|name| name == "other.net"));
}

#[tokio::test]
async fn test_leftovers_included_on_request() {
    let config = Config {
        include_leftovers: true,
        ..config()
    };
    let filter = Filter::new(config, example_world()).unwrap();

    let report = filter
        .run(&input(
            &["example.com"],
            &["a.example.com", "b.example.com", "other.net"],
        ))
        .await
        .unwrap();

    assert_eq!(sorted(report.results), ["b.example.com", "other.net"]);
    assert!(report.leftovers_included);
}

#[tokio::test]
async fn test_most_specific_zone_claims_candidate() {
    let dns = FakeDns::new()
        .wildcard("example.com", &[WILDCARD_A])
        .wildcard("dev.example.com", &["IN CNAME lb.dev.example.com."])
        // Matches the outer wildcard but not the inner one
        .record("x.dev.example.com", &[WILDCARD_A])
        .record("y.dev.example.com", &["IN CNAME lb.dev.example.com."])
        .into_arc();
    let filter = Filter::new(config(), dns).unwrap();

    let report = filter
        .run(&input(
            &["example.com", "dev.example.com"],
            &["x.dev.example.com", "y.dev.example.com"],
        ))
        .await
        .unwrap();

    assert_eq!(report.results, ["x.dev.example.com"]);
    assert_eq!(report.zones[0].zone, "dev.example.com");
    assert_eq!(report.zones[0].candidates, 2);
    assert_eq!(report.zones[1].zone, "example.com");
    assert_eq!(report.zones[1].status, ZoneStatus::Empty);
}

#[tokio::test]
async fn test_inconsistent_zone_contributes_nothing() {
    let dns = FakeDns::new()
        .zone("lb.example.org", ZoneBehavior::Rotating)
        .wildcard("example.com", &[WILDCARD_A])
        .record("b.example.com", &["IN A 198.51.100.7"])
        .into_arc();
    let filter = Filter::new(config(), dns).unwrap();

    let report = filter
        .run(&input(
            &["lb.example.org", "example.com"],
            &["one.lb.example.org", "two.lb.example.org", "b.example.com"],
        ))
        .await
        .unwrap();

    assert_eq!(report.results, ["b.example.com"]);
    let lb = report
        .zones
        .iter()
        .find(|zone| zone.zone == "lb.example.org")
        .unwrap();
    assert_eq!(lb.status, ZoneStatus::Inconsistent);
    assert_eq!(lb.unique, 0);
    assert_eq!(
        filter
            .stats()
            .get_error_count(ErrorType::ProfilingInconsistent),
        1
    );
}

#[tokio::test]
async fn test_unreachable_zone_does_not_stop_the_run() {
    let dns = FakeDns::new()
        .zone("down.example.net", ZoneBehavior::Dead)
        .wildcard("example.com", &[WILDCARD_A])
        .record("b.example.com", &["IN A 198.51.100.7"])
        .into_arc();
    let filter = Filter::new(config(), dns.clone()).unwrap();

    let report = filter
        .run(&input(
            &["down.example.net", "example.com"],
            &["www.down.example.net", "b.example.com"],
        ))
        .await
        .unwrap();

    assert_eq!(report.results, ["b.example.com"]);
    let down = report
        .zones
        .iter()
        .find(|zone| zone.zone == "down.example.net")
        .unwrap();
    assert_eq!(down.status, ZoneStatus::Unobtainable);
    assert_eq!(
        filter.stats().get_error_count(ErrorType::ProbeTimeout),
        5,
        "every synthetic probe of the dead zone times out"
    );
    // Candidates of a skipped zone are never probed
    assert!(!dns.queried().iter().any(|name| name == "www.down.example.net"));
}

#[tokio::test]
async fn test_failed_candidate_probe_is_excluded() {
    let dns = FakeDns::new()
        .wildcard("example.com", &[WILDCARD_A])
        .record("b.example.com", &["IN A 198.51.100.7"])
        .failing("c.example.com")
        .into_arc();
    let filter = Filter::new(config(), dns).unwrap();

    let report = filter
        .run(&input(&["example.com"], &["b.example.com", "c.example.com"]))
        .await
        .unwrap();

    assert_eq!(report.results, ["b.example.com"]);
    assert_eq!(filter.stats().get_error_count(ErrorType::ProbeTransport), 1);
}

#[tokio::test]
async fn test_invalid_candidates_never_appear() {
    let config = Config {
        include_leftovers: true,
        ..config()
    };
    let filter = Filter::new(config, example_world()).unwrap();

    let report = filter
        .run(&input(
            &["example.com"],
            &["b.example.com", "-bad-.example.com", "under_score.example.com", "other.net"],
        ))
        .await
        .unwrap();

    assert_eq!(sorted(report.results), ["b.example.com", "other.net"]);
    assert_eq!(report.invalid, 2);
    assert_eq!(filter.stats().get_error_count(ErrorType::InvalidDomain), 2);
}

#[tokio::test]
async fn test_duplicate_candidates_reported_once() {
    let filter = Filter::new(config(), example_world()).unwrap();

    let report = filter
        .run(&input(
            &["example.com", "example.com"],
            &["b.example.com", "b.example.com"],
        ))
        .await
        .unwrap();

    assert_eq!(report.results, ["b.example.com"]);
    assert_eq!(report.zones.len(), 1);
}

#[tokio::test]
async fn test_concurrency_does_not_change_results() {
    let subdomains: Vec<String> = (0..40)
        .map(|i| format!("host{i}.example.com"))
        .collect();
    let build = || {
        let mut dns = FakeDns::new()
            .wildcard("example.com", &[WILDCARD_A])
            .with_delay(Duration::from_millis(5));
        for (i, name) in subdomains.iter().enumerate() {
            if i % 3 == 0 {
                dns = dns.record(name, &[format!("IN A 198.51.100.{i}").as_str()]);
            }
        }
        dns.into_arc()
    };
    let subdomain_refs: Vec<&str> = subdomains.iter().map(String::as_str).collect();

    let serial_dns = build();
    let serial = Filter::new(
        Config {
            concurrency: 1,
            ..config()
        },
        serial_dns.clone(),
    )
    .unwrap()
    .run(&input(&["example.com"], &subdomain_refs))
    .await
    .unwrap();

    let parallel_dns = build();
    let parallel = Filter::new(
        Config {
            concurrency: 8,
            ..config()
        },
        parallel_dns.clone(),
    )
    .unwrap()
    .run(&input(&["example.com"], &subdomain_refs))
    .await
    .unwrap();

    assert_eq!(serial.results.len(), 14);
    assert_eq!(sorted(serial.results), sorted(parallel.results));
    assert_eq!(serial_dns.peak_in_flight(), 1);
    assert!(parallel_dns.peak_in_flight() > 1);
    assert!(parallel_dns.peak_in_flight() <= 8);
}

#[tokio::test]
async fn test_result_callback_sees_every_result() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let callback: ResultCallback = Arc::new(move |subdomain: &str| {
        sink.lock().unwrap().push(subdomain.to_string());
    });
    let config = Config {
        include_leftovers: true,
        ..config()
    };
    let filter = Filter::new(config, example_world())
        .unwrap()
        .with_result_callback(callback);

    let report = filter
        .run(&input(
            &["example.com"],
            &["a.example.com", "b.example.com", "other.net"],
        ))
        .await
        .unwrap();

    let seen = seen.lock().unwrap().clone();
    assert_eq!(sorted(seen), sorted(report.results));
}

#[tokio::test]
async fn test_empty_input_is_rejected() {
    let filter = Filter::new(config(), example_world()).unwrap();

    let err = filter
        .run(&input(&[], &["b.example.com"]))
        .await
        .unwrap_err();
    assert!(matches!(err, RunError::NoWildcards));

    let err = filter.run(&input(&["example.com"], &[])).await.unwrap_err();
    assert!(matches!(err, RunError::NoSubdomains));
}

#[tokio::test]
async fn test_zero_concurrency_is_rejected() {
    let config = Config {
        concurrency: 0,
        ..config()
    };
    assert!(matches!(
        Filter::new(config, example_world()),
        Err(RunError::Config(_))
    ));
}
