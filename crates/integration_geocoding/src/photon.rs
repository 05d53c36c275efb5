//! Photon geocoding provider (secondary)
//!
//! Queries the [Photon](https://photon.komoot.io) API, which answers with a
//! GeoJSON feature collection. Coordinates come as `[lon, lat]` and the
//! display name has to be assembled from address components.

use async_trait::async_trait;
use domain::Location;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::GeocodingConfig;
use crate::error::{GeocodingError, ProviderError};
use crate::provider::{self, GeocodingProvider};

/// Photon-based geocoding provider
#[derive(Debug)]
pub struct PhotonProvider {
    client: Client,
    base_url: String,
    max_results: u8,
    language: String,
}

impl PhotonProvider {
    /// Create a new Photon provider
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        Ok(Self {
            client: provider::build_client(config)?,
            base_url: config.photon.base_url.trim_end_matches('/').to_string(),
            max_results: config.effective_max_results(),
            language: config.language.clone(),
        })
    }

    async fn lookup(&self, query: &str) -> Result<Location, ProviderError> {
        let url = format!("{}/api/", self.base_url);
        let params = [
            ("q", query.to_string()),
            ("limit", self.max_results.to_string()),
            ("lang", self.language.clone()),
        ];

        debug!(%query, "Querying Photon");

        let collection: FeatureCollection =
            provider::get_json(&self.client, &url, &params).await?;
        collection
            .features
            .into_iter()
            .next()
            .ok_or(ProviderError::NoResults)?
            .into_location(query)
    }
}

#[async_trait]
impl GeocodingProvider for PhotonProvider {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Option<Location> {
        provider::log_outcome(self.name(), query, self.lookup(query).await)
    }

    fn name(&self) -> &'static str {
        "photon"
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
    #[serde(default)]
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// `[lon, lat]`
    coordinates: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct Properties {
    name: Option<String>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

impl Properties {
    /// Join non-empty components in priority order
    fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.name, &self.city, &self.state, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref().map(str::trim))
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

impl Feature {
    fn into_location(self, query: &str) -> Result<Location, ProviderError> {
        let &[lon, lat] = self.geometry.coordinates.as_slice() else {
            return Err(ProviderError::ParseError(format!(
                "Expected [lon, lat], got {} values",
                self.geometry.coordinates.len()
            )));
        };

        Location::new(lat, lon, self.properties.display_name(), query)
            .map_err(|_| ProviderError::InvalidCoordinates)
    }
}
