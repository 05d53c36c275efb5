//! Geocoding provider trait and shared HTTP plumbing

use async_trait::async_trait;
use domain::Location;
#[cfg(test)]
use mockall::automock;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::GeocodingConfig;
use crate::error::{GeocodingError, ProviderError};

/// One external geocoding service
///
/// Implementations never fail loudly: every problem is logged and
/// reported as `None` so the resolver can move on to the next provider.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Resolve a non-empty query to the provider's best-ranked location
    async fn geocode(&self, query: &str) -> Option<Location>;

    /// Short provider name for logs (e.g., "nominatim")
    fn name(&self) -> &'static str;
}

/// Build the HTTP client used by a provider
pub(crate) fn build_client(config: &GeocodingConfig) -> Result<Client, GeocodingError> {
    Client::builder()
        .timeout(config.timeout())
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| GeocodingError::ConfigurationError(e.to_string()))
}

/// Issue a GET request and return the status with the raw body
///
/// URLs are stripped from transport errors since some carry an access token.
pub(crate) async fn get_text(
    client: &Client,
    url: &str,
    params: &[(&str, String)],
) -> Result<(StatusCode, String), ProviderError> {
    let response = client
        .get(url)
        .query(params)
        .send()
        .await
        .map_err(map_transport_error)?;

    let status = response.status();
    let body = response.text().await.map_err(map_transport_error)?;
    Ok((status, body))
}

/// Issue a GET request and decode a successful JSON body
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    params: &[(&str, String)],
) -> Result<T, ProviderError> {
    let (status, body) = get_text(client, url, params).await?;

    if !status.is_success() {
        return Err(ProviderError::RequestFailed(format!("HTTP {status}")));
    }

    serde_json::from_str(&body).map_err(|e| ProviderError::ParseError(e.to_string()))
}

fn map_transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::ConnectionFailed(e.without_url().to_string())
    }
}

/// Collapse a provider outcome into an optional location, logging failures
pub(crate) fn log_outcome(
    provider: &'static str,
    query: &str,
    outcome: Result<Location, ProviderError>,
) -> Option<Location> {
    match outcome {
        Ok(location) => {
            debug!(
                provider,
                %query,
                lat = location.latitude(),
                lon = location.longitude(),
                "Geocoded query"
            );
            Some(location)
        },
        Err(ProviderError::NoResults) => {
            info!(provider, %query, "Provider returned no results");
            None
        },
        Err(e) => {
            warn!(provider, %query, error = %e, "Geocoding provider failed");
            None
        },
    }
}
