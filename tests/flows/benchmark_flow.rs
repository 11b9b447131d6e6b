//! Benchmark Flow Test
//!
//! Exercises the full pipeline short of the network:
//! argv, validation, resolver fan-out, await-all, report line.

use async_trait::async_trait;
use dns_bench::args::parse_bench_args;
use dns_bench::report::format_report;
use dns_bench_application::ports::{DnsResolver, Resolution};
use dns_bench_application::{RunBenchmarkUseCase, RunSequentialUseCase};
use dns_bench_domain::{DnsQuery, DomainError, MxRecord, RecordType};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Always-succeeding resolver with a fixed per-call latency.
struct FlowResolver {
    latency: Duration,
    closes: AtomicUsize,
}

impl FlowResolver {
    fn new(latency: Duration) -> Self {
        Self {
            latency,
            closes: AtomicUsize::new(0),
        }
    }

    fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsResolver for FlowResolver {
    async fn resolve(&self, _query: &DnsQuery) -> Result<Resolution, DomainError> {
        tokio::time::sleep(self.latency).await;
        Ok(Resolution::new(
            vec![IpAddr::V4(Ipv4Addr::new(192, 0, 2, 7))],
            1,
        ))
    }

    async fn lookup_mx(&self, _name: &str) -> Result<Vec<MxRecord>, DomainError> {
        Ok(vec![])
    }

    async fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

fn argv(tokens: &[&str]) -> Vec<String> {
    std::iter::once("dns-bench")
        .chain(tokens.iter().copied())
        .map(String::from)
        .collect()
}

// ============================================================================
// Full benchmark flow
// ============================================================================

#[tokio::test]
async fn test_benchmark_flow_prints_total_time() {
    // 5 resolutions at 5ms each, run concurrently: well under 50ms total.
    let request = parse_bench_args(argv(&["example.com", "a", "5"])).unwrap();
    assert_eq!(request.query.record_type, RecordType::A);
    assert!(request.upstream.is_none());

    let resolver = Arc::new(FlowResolver::new(Duration::from_millis(5)));
    let report = RunBenchmarkUseCase::new(resolver.clone())
        .execute(request.query, request.count)
        .await
        .unwrap();

    assert!(
        report.elapsed < Duration::from_millis(50),
        "elapsed {:?} too slow for 5 concurrent 5ms resolutions",
        report.elapsed
    );
    assert_eq!(resolver.close_count(), 1);

    let line = format_report(&report);
    assert!(line.starts_with("Total time: 0.0"), "line: {line}");
    assert!(line.ends_with(" s (5 resolutions)"), "line: {line}");

    // Six decimal places of fractional seconds survive formatting.
    let seconds = line
        .strip_prefix("Total time: ")
        .and_then(|rest| rest.split(' ').next())
        .unwrap();
    assert_eq!(seconds.split('.').nth(1).unwrap().len(), 6);
}

#[tokio::test]
async fn test_sequential_flow_is_serialized() {
    // Same argv contract, but 5 resolutions at 5ms each cannot finish in
    // under 25ms when issued one at a time.
    let request = parse_bench_args(argv(&["example.com", "a", "5"])).unwrap();

    let resolver = Arc::new(FlowResolver::new(Duration::from_millis(5)));
    let report = RunSequentialUseCase::new(resolver.clone())
        .execute(request.query, request.count)
        .await
        .unwrap();

    assert!(
        report.elapsed >= Duration::from_millis(25),
        "elapsed {:?} too fast for 5 serialized 5ms resolutions",
        report.elapsed
    );
    assert_eq!(resolver.close_count(), 1);
    assert!(format_report(&report).ends_with(" s (5 resolutions)"));
}

// ============================================================================
// Validation short-circuits
// ============================================================================

#[tokio::test]
async fn test_too_few_arguments_report_usage() {
    let err = parse_bench_args(argv(&["example.com"])).unwrap_err();
    assert_eq!(err.to_string(), "Usage: dns-bench <name> <type> <N> [server]");
}

#[tokio::test]
async fn test_unknown_type_reports_the_token() {
    let err = parse_bench_args(argv(&["example.com", "FOO", "5"])).unwrap_err();
    assert_eq!(err.to_string(), "Unknown record type: FOO");
}

#[tokio::test]
async fn test_negative_count_reports_positive_integer_rule() {
    let err = parse_bench_args(argv(&["example.com", "a", "-3"])).unwrap_err();
    assert_eq!(err.to_string(), "N must be a positive integer");
}
