use tracing::debug;

use crate::{
    data::{geocode::GeocodeClient, reverse::ReverseGeocodeClient},
    domain::{
        errors::LookupError,
        weather::{Coordinates, Location},
    },
};

/// Either a free-text place query or a coordinate pair. Coordinates win
/// when both are set; neither is an input error.
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    pub query: Option<String>,
    pub coords: Option<Coordinates>,
}

impl ResolveRequest {
    #[must_use]
    pub fn place(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            coords: None,
        }
    }

    #[must_use]
    pub fn coordinates(coords: Coordinates) -> Self {
        Self {
            query: None,
            coords: Some(coords),
        }
    }
}

/// Turns a search input into a canonical `Location`: forward geocoding for
/// queries, the degrade-don't-fail reverse ladder for coordinates.
#[derive(Debug, Clone)]
pub struct LocationResolver {
    geocode: GeocodeClient,
    reverse: ReverseGeocodeClient,
}

impl LocationResolver {
    #[must_use]
    pub fn new(geocode: GeocodeClient, reverse: ReverseGeocodeClient) -> Self {
        Self { geocode, reverse }
    }

    pub async fn resolve(&self, request: &ResolveRequest) -> Result<Location, LookupError> {
        if let Some(coords) = request.coords {
            debug!(
                latitude = coords.latitude,
                longitude = coords.longitude,
                "resolving coordinates"
            );
            return Ok(self.reverse.name_coordinates(coords).await);
        }

        let query = request
            .query
            .as_deref()
            .map(str::trim)
            .filter(|query| !query.is_empty())
            .ok_or(LookupError::InvalidInput)?;

        debug!(query, "resolving place query");
        self.geocode.search(query).await
    }
}
