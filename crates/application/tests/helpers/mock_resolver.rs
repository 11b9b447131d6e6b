#![allow(dead_code)]

use async_trait::async_trait;
use dns_bench_application::ports::{DnsResolver, Resolution};
use dns_bench_domain::{DnsQuery, DomainError, MxRecord};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Deterministic in-process resolver for benchmark tests.
///
/// Every resolve sleeps for a fixed latency and then either succeeds with
/// a fixed address or fails, depending on the injected failure pattern.
/// Call and close counters allow asserting the runner's contract.
pub struct MockDnsResolver {
    latency: Duration,
    fail_every: Option<usize>,
    calls: AtomicUsize,
    closes: AtomicUsize,
}

impl MockDnsResolver {
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            fail_every: None,
            calls: AtomicUsize::new(0),
            closes: AtomicUsize::new(0),
        }
    }

    /// Make every `n`-th resolve (1-based) fail.
    pub fn failing_every(mut self, n: usize) -> Self {
        self.fail_every = Some(n);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Resolution, DomainError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.latency).await;

        if let Some(n) = self.fail_every {
            if call % n == 0 {
                return Err(DomainError::Resolution(format!(
                    "injected failure for {}",
                    query.domain
                )));
            }
        }

        Ok(Resolution::new(
            vec![IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))],
            1,
        ))
    }

    async fn lookup_mx(&self, _name: &str) -> Result<Vec<MxRecord>, DomainError> {
        Ok(vec![
            MxRecord::new(5, "primary.example.com"),
            MxRecord::new(10, "backup.example.com"),
        ])
    }

    async fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}
