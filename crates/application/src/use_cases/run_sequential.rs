use crate::ports::DnsResolver;
use dns_bench_domain::{BenchmarkReport, DnsQuery, DomainError};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Runs one sequential-resolution benchmark: the serialized baseline the
/// concurrent runner is compared against.
///
/// Same contract as `RunBenchmarkUseCase` — `execute` consumes the use
/// case and closes the handle exactly once — but the next resolution is
/// not issued until the previous one has reached a terminal state.
pub struct RunSequentialUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl RunSequentialUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Resolve `query` `count` times, one at a time, timing the phase from
    /// the first launch to the last completion. Individual failures are
    /// counted, never propagated.
    pub async fn execute(self, query: DnsQuery, count: usize) -> Result<BenchmarkReport, DomainError> {
        if count == 0 {
            self.resolver.close().await;
            return Err(DomainError::InvalidCount);
        }

        debug!(domain = %query.domain, record_type = %query.record_type, count, "Starting sequential benchmark");

        let start = Instant::now();

        let mut failures = 0usize;
        for _ in 0..count {
            if let Err(e) = self.resolver.resolve(&query).await {
                failures += 1;
                debug!(error = %e, "Resolution failed");
            }
        }

        let elapsed = start.elapsed();

        self.resolver.close().await;

        if failures > 0 {
            warn!(failures, count, "Sequential benchmark completed with failures");
        }

        Ok(BenchmarkReport {
            elapsed,
            count,
            failures,
        })
    }
}
