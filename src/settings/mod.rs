//! Settings Module
//!
//! Loads and validates the checker configuration: the log level, the probe
//! shape, the geolocation endpoint, and the `targets` mapping of CDN
//! hostnames to labelled DNS servers. The mapping keeps its file order, so
//! results are reported in the order the operator wrote them.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;
