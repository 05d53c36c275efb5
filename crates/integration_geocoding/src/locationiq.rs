//! LocationIQ geocoding provider (tertiary)
//!
//! Queries the [LocationIQ](https://locationiq.com) search API. On success it
//! serves a Nominatim-shaped list; on failure it serves a JSON object such as
//! `{"error": "Invalid key"}`, often with a 4xx status.

use async_trait::async_trait;
use domain::Location;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::GeocodingConfig;
use crate::error::{GeocodingError, ProviderError};
use crate::nominatim::PlaceResult;
use crate::provider::{self, GeocodingProvider};

/// LocationIQ-based geocoding provider
pub struct LocationIqProvider {
    client: Client,
    base_url: String,
    access_token: SecretString,
    max_results: u8,
    language: String,
}

impl std::fmt::Debug for LocationIqProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationIqProvider")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .field("max_results", &self.max_results)
            .finish_non_exhaustive()
    }
}

impl LocationIqProvider {
    /// Create a provider if an access token is configured
    ///
    /// Returns `Ok(None)` when no token is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn from_config(config: &GeocodingConfig) -> Result<Option<Self>, GeocodingError> {
        let Some(token) = config.locationiq.access_token_str() else {
            return Ok(None);
        };

        Ok(Some(Self {
            client: provider::build_client(config)?,
            base_url: config.locationiq.base_url.trim_end_matches('/').to_string(),
            access_token: SecretString::from(token.to_owned()),
            max_results: config.effective_max_results(),
            language: config.language.clone(),
        }))
    }

    async fn lookup(&self, query: &str) -> Result<Location, ProviderError> {
        let url = format!("{}/v1/search", self.base_url);
        let params = [
            ("key", self.access_token.expose_secret().to_owned()),
            ("q", query.to_string()),
            ("format", "json".to_string()),
            ("limit", self.max_results.to_string()),
            ("accept-language", self.language.clone()),
        ];

        debug!(%query, "Querying LocationIQ");

        let (status, body) = provider::get_text(&self.client, &url, &params).await?;
        let response: SearchResponse = serde_json::from_str(&body).map_err(|e| {
            if status.is_success() {
                ProviderError::ParseError(e.to_string())
            } else {
                ProviderError::RequestFailed(format!("HTTP {status}"))
            }
        })?;

        match response {
            SearchResponse::Error(object) => Err(ProviderError::Upstream(
                object
                    .get("error")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("error object returned")
                    .to_string(),
            )),
            SearchResponse::Places(_) if !status.is_success() => {
                Err(ProviderError::RequestFailed(format!("HTTP {status}")))
            },
            SearchResponse::Places(places) => places
                .into_iter()
                .next()
                .ok_or(ProviderError::NoResults)?
                .into_location(query),
        }
    }
}

#[async_trait]
impl GeocodingProvider for LocationIqProvider {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Option<Location> {
        provider::log_outcome(self.name(), query, self.lookup(query).await)
    }

    fn name(&self) -> &'static str {
        "locationiq"
    }
}

/// A list means results; an object means an error
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SearchResponse {
    Places(Vec<PlaceResult>),
    Error(serde_json::Map<String, serde_json::Value>),
}
