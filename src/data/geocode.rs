use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{errors::LookupError, weather::Location};

const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Forward geocoding over the Open-Meteo search endpoint: place name in,
/// first candidate out.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(GEOCODE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(8))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    pub async fn search(&self, query: &str) -> Result<Location, LookupError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("name", query),
                ("count", "2"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|err| LookupError::network("city", err))?
            .error_for_status()
            .map_err(|err| LookupError::network("city", err))?;

        let payload: GeocodeResponse = response
            .json()
            .await
            .map_err(|err| LookupError::network("city", err))?;

        let candidate = payload
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::NotFound(query.to_string()))?;

        debug!(query, name = %candidate.name, "geocoded search query");

        Ok(Location {
            name: candidate.name,
            country: candidate.country.unwrap_or_default(),
            latitude: candidate.latitude,
            longitude: candidate.longitude,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}
