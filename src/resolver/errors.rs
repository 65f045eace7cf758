// 3rd party crates
use thiserror::Error;

/// Custom error type for DNS resolution.
///
/// An answer with no records is not an error; `resolve` reports it as
/// `Ok(None)` so callers can tell "empty but valid" from "failed".
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Invalid DNS server address '{address}': {message}")]
    InvalidServer { address: String, message: String },

    #[error("DNS query via {server} failed: {source}")]
    Query {
        server: String,
        #[source]
        source: hickory_resolver::ResolveError,
    },
}
