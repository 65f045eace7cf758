// Standard library
use std::net::IpAddr;

// 3rd party crates
use thiserror::Error;

/// Custom error type for latency probing.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Failed to open ICMP socket: {0}")]
    Socket(String),

    #[error("{0} did not answer any probe")]
    Unreachable(IpAddr),
}
