use super::DnsQuery;
use std::time::Duration;

/// One validated benchmark run: which query to replicate, how many times,
/// and which upstream server to direct it at (`None` = system resolver
/// configuration).
#[derive(Debug, Clone)]
pub struct BenchRequest {
    pub query: DnsQuery,
    pub count: usize,
    pub upstream: Option<String>,
}

impl BenchRequest {
    pub fn new(query: DnsQuery, count: usize, upstream: Option<String>) -> Self {
        Self {
            query,
            count,
            upstream,
        }
    }
}

/// Outcome of one benchmark run.
///
/// `elapsed` covers the fan-out/await phase only, measured on a monotonic
/// clock; sub-millisecond resolution is preserved until formatting.
/// `failures` counts resolutions that reached a terminal state with an
/// error. Failed resolutions still count towards `count` for timing.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub elapsed: Duration,
    pub count: usize,
    pub failures: usize,
}

impl BenchmarkReport {
    /// Elapsed wall-clock time in fractional seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
