//! Resolver Module
//!
//! Answers "what IP does this hostname resolve to when a specific DNS
//! server is asked?". Each call builds a resolver pointed at exactly one
//! name server, so different servers can hand out different CDN edges for
//! the same hostname.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;
