// 3rd party crates
use serde::Deserialize;

/// Location answer for a single IP. The service reports unknown fields as
/// JSON `null`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct GeoLocation {
    pub country_code: Option<String>,
    pub city: Option<String>,
}

/// Geolocation client over the JSONP endpoint.
pub struct GeoClient {
    pub client: reqwest::Client,
    pub endpoint: String,
    pub timeout: std::time::Duration,
}
