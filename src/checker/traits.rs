// Standard library
use std::net::IpAddr;

// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::geo::errors::LookupError;
use crate::geo::types::GeoLocation;
use crate::prober::errors::ProbeError;
use crate::prober::types::LatencyStats;
use crate::resolver::errors::ResolutionError;

/// Resolves a hostname through one specific DNS server.
#[async_trait]
pub trait Resolve: Send + Sync {
    /// First address `hostname` resolves to when `server` is asked.
    /// `Ok(None)` means the server answered, but with no address records.
    async fn resolve(
        &self,
        hostname: &str,
        server: &str,
    ) -> Result<Option<IpAddr>, ResolutionError>;
}

/// Maps an IP address to a coarse geographic location.
#[async_trait]
pub trait Locate: Send + Sync {
    async fn locate(&self, ip: IpAddr) -> Result<GeoLocation, LookupError>;
}

/// Measures round-trip latency to an IP address.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, ip: IpAddr) -> Result<LatencyStats, ProbeError>;
}
