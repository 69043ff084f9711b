//! IP-based coordinate detection, the terminal stand-in for browser
//! geolocation. Only coordinates are consumed; naming the place is the
//! resolver's job so the reverse-geocoding path stays on the same rails.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::domain::weather::Coordinates;

const GEOIP_URL: &str = "https://ipapi.co/json/";

#[derive(Debug, Clone)]
pub struct GeoipClient {
    client: Client,
    base_url: String,
}

impl Default for GeoipClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoipClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(GEOIP_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(5))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    /// `None` on any failure; the caller falls back to the default place.
    pub async fn detect(&self) -> Option<Coordinates> {
        let response = match self.client.get(&self.base_url).send().await {
            Ok(response) => response,
            Err(err) => {
                debug!(error = %err, "location detection request failed");
                return None;
            }
        };

        let payload: IpApiResponse = match response.json().await {
            Ok(payload) => payload,
            Err(err) => {
                debug!(error = %err, "location detection response unreadable");
                return None;
            }
        };

        Some(Coordinates::new(payload.latitude?, payload.longitude?))
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
}
