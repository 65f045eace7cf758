//! Latency Probe Module
//!
//! Measures round-trip time to a resolved edge IP with a handful of small
//! ICMP echo probes. Individual lost probes are tolerated; a target that
//! never answers is reported as unreachable.

pub mod errors;
pub mod impls;
pub mod types;
