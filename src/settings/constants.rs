/// Default settings
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_PROBE_COUNT: u32 = 3;
pub const DEFAULT_PROBE_PAYLOAD_BYTES: usize = 10;
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 2000;
pub const DEFAULT_GEO_ENDPOINT: &str = "https://geolocation-db.com/jsonp";
pub const DEFAULT_GEO_TIMEOUT_SECS: u64 = 5;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "edgeprobe.toml";

/// Environment variable overriding the config file path.
pub const CONFIG_PATH_ENV: &str = "EDGEPROBE_CONFIG_PATH";

pub fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

pub fn default_probe_count() -> u32 {
    DEFAULT_PROBE_COUNT
}

pub fn default_probe_payload_bytes() -> usize {
    DEFAULT_PROBE_PAYLOAD_BYTES
}

pub fn default_probe_timeout_ms() -> u64 {
    DEFAULT_PROBE_TIMEOUT_MS
}

pub fn default_geo_endpoint() -> String {
    DEFAULT_GEO_ENDPOINT.to_string()
}

pub fn default_geo_timeout_secs() -> u64 {
    DEFAULT_GEO_TIMEOUT_SECS
}

/// Example configuration
pub const DEFAULT_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "info"

# Latency probe configuration
[probe]
count = 3
payload_bytes = 10
timeout_ms = 2000

# Geolocation service (JSONP endpoint, queried as <endpoint>/<ip>)
[geo]
endpoint = "https://geolocation-db.com/jsonp"
timeout_secs = 5

# CDN hostnames to check. Each entry maps an operator-chosen label
# (e.g. a region name) to the DNS server that should answer for it.
#
# [targets."d111111abcdef8.cloudfront.net"]
# virginia = "8.8.8.8"
# zurich = "9.9.9.9"
"#;
