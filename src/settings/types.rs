// Standard library
use std::path::PathBuf;
use std::sync::Arc;

// 3rd party crates
use indexmap::IndexMap;
use serde::Deserialize;
use tokio::sync::RwLock;

// Current module imports
use super::constants::{
    default_geo_endpoint, default_geo_timeout_secs, default_log_level, default_probe_count,
    default_probe_payload_bytes, default_probe_timeout_ms,
};

/// Hostname -> { label -> DNS server address }, in file order.
pub type ServerSpec = IndexMap<String, IndexMap<String, String>>;

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Shape of the ICMP latency probe.
#[derive(Debug, Deserialize, Clone)]
pub struct ProbeSettings {
    /// Number of echo probes per target IP
    #[serde(default = "default_probe_count")]
    pub count: u32,
    /// Payload size of each probe in bytes
    #[serde(default = "default_probe_payload_bytes")]
    pub payload_bytes: usize,
    /// Per-probe timeout in milliseconds
    #[serde(default = "default_probe_timeout_ms")]
    pub timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeoSettings {
    /// JSONP geolocation endpoint, queried as `<endpoint>/<ip>`
    #[serde(default = "default_geo_endpoint")]
    pub endpoint: String,
    /// HTTP request timeout in seconds
    #[serde(default = "default_geo_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub probe: ProbeSettings,
    #[serde(default)]
    pub geo: GeoSettings,

    #[serde(default)]
    pub targets: ServerSpec,
}

/// Settings that have passed validation. Construction is the proof.
pub struct ValidatedSettings(pub(super) Settings);

/// Manages the application settings, allowing for loading the configuration.
pub struct ConfigManager {
    pub settings: Arc<RwLock<Settings>>,
    pub _config_path: PathBuf,
}
