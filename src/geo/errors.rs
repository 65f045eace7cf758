// 3rd party crates
use thiserror::Error;

/// Custom error type for geolocation lookups.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Geolocation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed geolocation payload: {0}")]
    MalformedPayload(String),

    #[error("Failed to parse geolocation response: {0}")]
    Parse(#[from] serde_json::Error),
}
