// Standard library
use std::time::Duration;

/// Round-trip statistics over the probes that answered, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyStats {
    pub min_ms: f64,
    pub max_ms: f64,
    pub avg_ms: f64,
}

/// ICMP echo prober.
pub struct IcmpProber {
    pub client: surge_ping::Client,
    pub count: u32,
    pub payload: Vec<u8>,
    pub timeout: Duration,
}
