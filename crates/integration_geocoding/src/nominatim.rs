//! Nominatim geocoding provider (primary)
//!
//! Queries the [Nominatim](https://nominatim.openstreetmap.org) search API.
//! Results are a ranked JSON list whose coordinates arrive as strings.

use async_trait::async_trait;
use domain::Location;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::GeocodingConfig;
use crate::error::{GeocodingError, ProviderError};
use crate::provider::{self, GeocodingProvider};

/// Nominatim-based geocoding provider
#[derive(Debug)]
pub struct NominatimProvider {
    client: Client,
    base_url: String,
    max_results: u8,
    language: String,
}

impl NominatimProvider {
    /// Create a new Nominatim provider
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        Ok(Self {
            client: provider::build_client(config)?,
            base_url: config.nominatim.base_url.trim_end_matches('/').to_string(),
            max_results: config.effective_max_results(),
            language: config.language.clone(),
        })
    }

    async fn lookup(&self, query: &str) -> Result<Location, ProviderError> {
        let url = format!("{}/search", self.base_url);
        let params = [
            ("q", query.to_string()),
            ("format", "json".to_string()),
            ("limit", self.max_results.to_string()),
            ("accept-language", self.language.clone()),
        ];

        debug!(%query, "Querying Nominatim");

        let results: Vec<PlaceResult> = provider::get_json(&self.client, &url, &params).await?;
        results
            .into_iter()
            .next()
            .ok_or(ProviderError::NoResults)?
            .into_location(query)
    }
}

#[async_trait]
impl GeocodingProvider for NominatimProvider {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Option<Location> {
        provider::log_outcome(self.name(), query, self.lookup(query).await)
    }

    fn name(&self) -> &'static str {
        "nominatim"
    }
}

/// One entry of a Nominatim-style result list
///
/// LocationIQ serves the same shape.
#[derive(Debug, Deserialize)]
pub(crate) struct PlaceResult {
    lat: Degrees,
    lon: Degrees,
    display_name: Option<String>,
}

/// Coordinate component, usually a string but tolerated as a number
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Degrees {
    Text(String),
    Number(f64),
}

impl Degrees {
    fn parse(&self, axis: &str) -> Result<f64, ProviderError> {
        match self {
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| ProviderError::ParseError(format!("Invalid {axis}: '{text}'"))),
            Self::Number(value) => Ok(*value),
        }
    }
}

impl PlaceResult {
    pub(crate) fn into_location(self, query: &str) -> Result<Location, ProviderError> {
        let lat = self.lat.parse("latitude")?;
        let lon = self.lon.parse("longitude")?;
        Location::new(lat, lon, self.display_name, query)
            .map_err(|_| ProviderError::InvalidCoordinates)
    }
}
