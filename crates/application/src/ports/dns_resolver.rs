use async_trait::async_trait;
use dns_bench_domain::{DnsQuery, DomainError, MxRecord};
use std::net::IpAddr;
use std::sync::Arc;

/// Outcome of a single resolution.
///
/// The benchmark discards the payload; `addresses` exists for the one-shot
/// address lookup tool and `records` for reporting how many answers a
/// non-address query returned.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub addresses: Arc<Vec<IpAddr>>,
    pub records: usize,
}

impl Resolution {
    pub fn new(addresses: Vec<IpAddr>, records: usize) -> Self {
        Self {
            addresses: Arc::new(addresses),
            records,
        }
    }
}

/// Abstract DNS resolution capability.
///
/// Implementations own whatever sockets or connection state their queries
/// need. `close` releases those resources; it must be safe to call once
/// after any mix of successful and failed resolutions, and resolving after
/// `close` fails with `DomainError::ResolverClosed`. Query timeouts,
/// retries and caching are the implementation's concern, not the caller's.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<Resolution, DomainError>;

    /// MX answers for `name`, ordered by preference.
    async fn lookup_mx(&self, name: &str) -> Result<Vec<MxRecord>, DomainError>;

    /// Release the underlying network resources.
    async fn close(&self);
}
