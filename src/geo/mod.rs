//! Geolocation Module
//!
//! Resolves an IP address to a coarse location (country code, city) through
//! an external JSONP endpoint. The service wraps its JSON body in a
//! function-call envelope; the wrapper is stripped before parsing.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;
