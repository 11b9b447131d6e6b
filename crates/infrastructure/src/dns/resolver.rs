use super::record_type_map::RecordTypeMapper;
use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use dns_bench_application::ports::{DnsResolver, Resolution};
use dns_bench_domain::{DnsQuery, DomainError, MxRecord};
use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use hickory_resolver::proto::rr::RData;
use hickory_resolver::TokioAsyncResolver;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::debug;

/// DNS resolution through hickory-resolver.
///
/// Construction only configures the handle; no query is sent until
/// `resolve` is called. The inner resolver lives behind an
/// `ArcSwapOption` so `close` can release it exactly once while
/// concurrent resolutions hold their own `Arc` until they finish.
#[derive(Debug)]
pub struct HickoryDnsResolver {
    inner: ArcSwapOption<TokioAsyncResolver>,
}

impl HickoryDnsResolver {
    /// Dispatch between the system configuration and a single-server
    /// override.
    pub fn build(upstream: Option<&str>) -> Result<Self, DomainError> {
        match upstream {
            Some(server) => Self::with_upstream(server),
            None => Self::from_system(),
        }
    }

    /// Resolver using the host's resolv configuration, no override.
    pub fn from_system() -> Result<Self, DomainError> {
        let resolver = TokioAsyncResolver::tokio_from_system_conf()
            .map_err(|e| DomainError::ResolverInit(e.to_string()))?;

        debug!("Resolver configured from system resolv configuration");
        Ok(Self::wrap(resolver))
    }

    /// Resolver directing every query to `server` and nothing else.
    ///
    /// `server` is an IP address (port 53 implied) or a full socket
    /// address. The hosts file is disabled so no name can resolve without
    /// touching the override.
    pub fn with_upstream(server: &str) -> Result<Self, DomainError> {
        let socket_addr = parse_server_addr(server)?;

        let mut config = ResolverConfig::new();
        config.add_name_server(NameServerConfig {
            socket_addr,
            protocol: Protocol::Udp,
            tls_dns_name: None,
            trust_negative_responses: false,
            bind_addr: None,
        });

        let mut opts = ResolverOpts::default();
        opts.use_hosts_file = false;

        let resolver = TokioAsyncResolver::tokio(config, opts);

        debug!(server = %socket_addr, "Resolver configured with upstream override");
        Ok(Self::wrap(resolver))
    }

    fn wrap(resolver: TokioAsyncResolver) -> Self {
        Self {
            inner: ArcSwapOption::from_pointee(resolver),
        }
    }

    fn handle(&self) -> Result<Arc<TokioAsyncResolver>, DomainError> {
        self.inner.load_full().ok_or(DomainError::ResolverClosed)
    }
}

fn parse_server_addr(server: &str) -> Result<SocketAddr, DomainError> {
    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }

    server
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, 53))
        .map_err(|_| DomainError::ResolverInit(format!("Invalid DNS server address: {server}")))
}

#[async_trait]
impl DnsResolver for HickoryDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Resolution, DomainError> {
        let resolver = self.handle()?;
        let record_type = RecordTypeMapper::to_hickory(&query.record_type);

        let lookup = resolver
            .lookup(query.domain.as_ref(), record_type)
            .await
            .map_err(|e| DomainError::Resolution(e.to_string()))?;

        let mut addresses = Vec::new();
        let mut records = 0usize;
        for record in lookup.record_iter() {
            records += 1;
            match record.data() {
                Some(RData::A(a)) => addresses.push(IpAddr::V4(a.0)),
                Some(RData::AAAA(aaaa)) => addresses.push(IpAddr::V6(aaaa.0)),
                _ => {}
            }
        }

        Ok(Resolution::new(addresses, records))
    }

    async fn lookup_mx(&self, name: &str) -> Result<Vec<MxRecord>, DomainError> {
        let resolver = self.handle()?;

        let lookup = resolver
            .mx_lookup(name)
            .await
            .map_err(|e| DomainError::Resolution(e.to_string()))?;

        let mut records: Vec<MxRecord> = lookup
            .iter()
            .map(|mx| MxRecord::new(mx.preference(), mx.exchange().to_utf8()))
            .collect();
        records.sort();

        Ok(records)
    }

    async fn close(&self) {
        if self.inner.swap(None).is_some() {
            debug!("Resolver handle released");
        }
    }
}
