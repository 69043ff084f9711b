//! Reverse geocoding: name a coordinate pair for display. Failures never
//! surface as pipeline errors; the ladder is keyed primary, keyless
//! fallback, then an "Unknown Location" placeholder.

use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::weather::{Coordinates, Location};

const PRIMARY_URL: &str = "https://api-bdc.net/data/reverse-geocode";
const FALLBACK_URL: &str = "https://api.bigdatacloud.net/data/reverse-geocode-client";

pub const API_KEY_ENV: &str = "SKYCAST_BDC_KEY";

#[derive(Debug, Clone)]
pub struct ReverseGeocodeClient {
    client: Client,
    primary_url: String,
    fallback_url: String,
    api_key: Option<String>,
}

impl ReverseGeocodeClient {
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_urls(PRIMARY_URL, FALLBACK_URL, api_key)
    }

    pub fn with_base_urls(
        primary_url: impl Into<String>,
        fallback_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(8))
                .build()
                .expect("reqwest client"),
            primary_url: primary_url.into(),
            fallback_url: fallback_url.into(),
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }

    /// Key from the environment; without one the primary provider is skipped.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).ok())
    }

    pub async fn name_coordinates(&self, coords: Coordinates) -> Location {
        if let Some(key) = self.api_key.clone() {
            match self.lookup(&self.primary_url, coords, Some(&key)).await {
                Ok(location) => return location,
                Err(err) => {
                    warn!(error = %err, "primary reverse geocoding failed, trying fallback");
                }
            }
        }

        match self.lookup(&self.fallback_url, coords, None).await {
            Ok(location) => location,
            Err(err) => {
                warn!(error = %err, "reverse geocoding unavailable, using placeholder name");
                Location::unknown(coords)
            }
        }
    }

    async fn lookup(
        &self,
        base_url: &str,
        coords: Coordinates,
        api_key: Option<&str>,
    ) -> Result<Location> {
        let mut request = self.client.get(base_url).query(&[
            ("latitude", coords.latitude.to_string()),
            ("longitude", coords.longitude.to_string()),
            ("localityLanguage", "en".to_string()),
        ]);
        if let Some(key) = api_key {
            request = request.query(&[("key", key)]);
        }

        let payload: BdcResponse = request
            .send()
            .await
            .context("reverse geocoding request failed")?
            .error_for_status()
            .context("reverse geocoding returned non-success status")?
            .json()
            .await
            .context("failed to decode reverse geocoding response")?;

        let Some(name) = payload.place_name() else {
            bail!("reverse geocoding response carried no place name");
        };

        debug!(name, latitude = coords.latitude, longitude = coords.longitude, "named coordinates");

        Ok(Location {
            name,
            country: payload.country_name.unwrap_or_default(),
            latitude: coords.latitude,
            longitude: coords.longitude,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BdcResponse {
    city: Option<String>,
    locality: Option<String>,
    principal_subdivision: Option<String>,
    country_name: Option<String>,
}

impl BdcResponse {
    fn place_name(&self) -> Option<String> {
        [&self.city, &self.locality, &self.principal_subdivision]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_name_prefers_city_then_locality_then_subdivision() {
        let response = BdcResponse {
            city: Some("Austin".to_string()),
            locality: Some("Downtown".to_string()),
            principal_subdivision: Some("Texas".to_string()),
            country_name: None,
        };
        assert_eq!(response.place_name().as_deref(), Some("Austin"));

        let response = BdcResponse {
            city: Some(String::new()),
            locality: None,
            principal_subdivision: Some("Texas".to_string()),
            country_name: None,
        };
        assert_eq!(response.place_name().as_deref(), Some("Texas"));
    }

    #[test]
    fn empty_key_disables_the_primary_provider() {
        let client = ReverseGeocodeClient::new(Some(String::new()));
        assert!(client.api_key.is_none());
    }
}
