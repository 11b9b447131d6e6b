use crate::ports::DnsResolver;
use dns_bench_domain::{BenchmarkReport, DnsQuery, DomainError};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Runs one concurrent-resolution benchmark.
///
/// Owns the resolver handle for exactly one run: `execute` consumes the
/// use case, waits for every resolution to reach a terminal state, and
/// closes the handle before returning, on success and failure alike.
pub struct RunBenchmarkUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl RunBenchmarkUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Fan out `count` resolutions of `query` and time the phase from
    /// first launch to last completion.
    ///
    /// All `count` resolutions are spawned before any is awaited, so they
    /// are genuinely in flight together. Individual failures (and task
    /// panics) are counted, never propagated: a failing query must not
    /// abort measurement of the others. No timeout is imposed here; any
    /// timeout behavior belongs to the resolver.
    pub async fn execute(self, query: DnsQuery, count: usize) -> Result<BenchmarkReport, DomainError> {
        if count == 0 {
            self.resolver.close().await;
            return Err(DomainError::InvalidCount);
        }

        debug!(domain = %query.domain, record_type = %query.record_type, count, "Starting benchmark");

        let start = Instant::now();

        let mut in_flight = FuturesUnordered::new();
        for _ in 0..count {
            let resolver = Arc::clone(&self.resolver);
            let query = query.clone();
            in_flight.push(tokio::spawn(async move { resolver.resolve(&query).await }));
        }

        let mut failures = 0usize;
        while let Some(join_result) = in_flight.next().await {
            match join_result {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => {
                    failures += 1;
                    debug!(error = %e, "Resolution failed");
                }
                Err(e) => {
                    failures += 1;
                    warn!(error = %e, "Resolution task panicked");
                }
            }
        }

        let elapsed = start.elapsed();

        self.resolver.close().await;

        if failures > 0 {
            warn!(failures, count, "Benchmark completed with failures");
        }

        Ok(BenchmarkReport {
            elapsed,
            count,
            failures,
        })
    }
}
