// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),

    #[error("Probe count must be greater than 0, got {0}")]
    InvalidProbeCount(u32),

    #[error("Probe timeout must be greater than 0 ms, got {0}")]
    InvalidProbeTimeout(u64),

    #[error("Geolocation endpoint must not be empty")]
    EmptyGeoEndpoint,

    #[error("No targets configured (empty [targets] table?)")]
    NoTargets,

    #[error("Target '{0}' has no DNS servers configured")]
    NoServersForTarget(String),

    #[error("Empty DNS server address for target '{hostname}', label '{label}'")]
    EmptyServerAddress { hostname: String, label: String },
}
