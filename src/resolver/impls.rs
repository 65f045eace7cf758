// Standard library
use std::net::IpAddr;

// 3rd party crates
use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::{ResolveError, TokioResolver};
use tokio::net::lookup_host;
use tracing::debug;

// Project imports
use crate::checker::traits::Resolve;

// Current module imports
use super::constants::DNS_PORT;
use super::errors::ResolutionError;
use super::types::DnsResolver;

impl DnsResolver {
    pub fn new() -> Self {
        Self { port: DNS_PORT }
    }

    /// Turns a configured server address (IP literal or hostname) into an
    /// IP the resolver can be pointed at. Hostnames go through the system
    /// resolver.
    async fn server_addr(&self, address: &str) -> Result<IpAddr, ResolutionError> {
        if let Ok(ip) = address.parse::<IpAddr>() {
            return Ok(ip);
        }

        let mut addrs = lookup_host((address, self.port)).await.map_err(|e| {
            ResolutionError::InvalidServer {
                address: address.to_string(),
                message: e.to_string(),
            }
        })?;

        addrs
            .next()
            .map(|sock| sock.ip())
            .ok_or_else(|| ResolutionError::InvalidServer {
                address: address.to_string(),
                message: "system resolver returned no addresses".to_string(),
            })
    }
}

impl Default for DnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Resolve for DnsResolver {
    async fn resolve(
        &self,
        hostname: &str,
        server: &str,
    ) -> Result<Option<IpAddr>, ResolutionError> {
        let server_ip = self.server_addr(server).await?;

        let name_servers = NameServerConfigGroup::from_ips_clear(&[server_ip], self.port, true);
        let resolver = TokioResolver::builder_with_config(
            ResolverConfig::from_parts(None, vec![], name_servers),
            TokioConnectionProvider::default(),
        )
        .build();

        match resolver.lookup_ip(hostname).await {
            // First answer wins; CDNs rotate the rest anyway.
            Ok(lookup) => Ok(lookup.iter().next()),
            Err(e) if is_empty_answer(&e) => {
                debug!("{} has no address records at {}", hostname, server);
                Ok(None)
            }
            Err(e) => Err(ResolutionError::Query {
                server: server.to_string(),
                source: e,
            }),
        }
    }
}

/// A name-error or empty answer section (NODATA/NXDOMAIN), as opposed to a
/// transport failure. Hickory reports both through its error type.
fn is_empty_answer(error: &ResolveError) -> bool {
    let message = error.to_string();
    message.contains("no records found") || message.contains("NoRecordsFound")
}
