// Standard library
use std::net::IpAddr;
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use tracing::debug;

// Project imports
use crate::checker::traits::Locate;
use crate::settings::types::GeoSettings;

// Current module imports
use super::constants::UNKNOWN_FIELD;
use super::errors::LookupError;
use super::types::{GeoClient, GeoLocation};

impl GeoLocation {
    /// Country code with a readable fallback for `null` answers.
    pub fn country_code_display(&self) -> &str {
        self.country_code.as_deref().unwrap_or(UNKNOWN_FIELD)
    }

    /// City with a readable fallback for `null` answers.
    pub fn city_display(&self) -> &str {
        self.city.as_deref().unwrap_or(UNKNOWN_FIELD)
    }
}

impl GeoClient {
    pub fn new(settings: GeoSettings) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(LookupError::Http)?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(settings.timeout_secs),
        })
    }
}

#[async_trait]
impl Locate for GeoClient {
    async fn locate(&self, ip: IpAddr) -> Result<GeoLocation, LookupError> {
        let url = format!("{}/{}", self.endpoint, ip);
        debug!("Querying geolocation endpoint: {}", url);

        let body = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let payload = strip_envelope(&body)?;
        let location: GeoLocation = serde_json::from_str(payload)?;
        Ok(location)
    }
}

/// Strips the JSONP function-call wrapper: everything up to and including
/// the first `(`, and the trailing `)`.
fn strip_envelope(body: &str) -> Result<&str, LookupError> {
    let open = body.find('(').ok_or_else(|| {
        LookupError::MalformedPayload(format!("no '(' in response: {:.60}", body))
    })?;
    body[open + 1..]
        .trim_end()
        .strip_suffix(')')
        .ok_or_else(|| LookupError::MalformedPayload(format!("no trailing ')': {:.60}", body)))
}
