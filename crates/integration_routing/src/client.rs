//! OSRM routing client
//!
//! Computes routes with the [OSRM](https://project-osrm.org) `route` service.
//! Coordinates travel longitude-first in the URL path; the full path
//! geometry is requested as GeoJSON.

use std::time::Duration;

use async_trait::async_trait;
use domain::{Route, RouteRequest};
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::RoutingConfig;
use crate::error::RoutingError;
use crate::profile::map_profile;

/// Trait for routing clients
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RouteClient: Send + Sync {
    /// Compute the best route for a request
    async fn get_route(&self, request: &RouteRequest) -> Result<Route, RoutingError>;
}

/// OSRM-based routing client
#[derive(Debug)]
pub struct OsrmRouteClient {
    client: Client,
    base_url: Url,
    timeout_secs: u64,
}

impl OsrmRouteClient {
    /// Create a new OSRM routing client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &RoutingConfig) -> Result<Self, RoutingError> {
        config.validate().map_err(RoutingError::ConfigurationError)?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| RoutingError::ConfigurationError(e.to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| RoutingError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Build `{base}/route/v1/{profile}/{lon},{lat};{lon},{lat}?overview=full&geometries=geojson`
    fn route_url(&self, request: &RouteRequest) -> Result<Url, RoutingError> {
        let profile = map_profile(request.mode);
        let coordinates = format!(
            "{},{};{},{}",
            request.start.lon, request.start.lat, request.end.lon, request.end.lat
        );

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| RoutingError::ConfigurationError("base_url cannot be a base".into()))?
            .pop_if_empty()
            .extend(["route", "v1", profile, coordinates.as_str()]);
        url.query_pairs_mut()
            .append_pair("overview", "full")
            .append_pair("geometries", "geojson");

        Ok(url)
    }

    /// Parse an OSRM response body into the best route
    ///
    /// OSRM reports failures such as `NoRoute` with a 4xx status and a JSON
    /// body, so the body is inspected before the status.
    fn parse_route_response(status: reqwest::StatusCode, body: &str) -> Result<Route, RoutingError> {
        let raw: RawRouteResponse = serde_json::from_str(body).map_err(|e| {
            warn!(%status, error = %e, "Unreadable routing response");
            RoutingError::Unavailable
        })?;

        if raw.code != "Ok" {
            debug!(code = %raw.code, message = ?raw.message, "Routing provider reported failure");
            return Err(RoutingError::NoRoute);
        }

        let best = raw
            .routes
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(RoutingError::NoRoute)?;

        Ok(Route {
            distance_meters: best.distance,
            duration_seconds: best.duration,
            geometry: best.geometry.coordinates,
        })
    }
}

#[async_trait]
impl RouteClient for OsrmRouteClient {
    #[instrument(skip(self), fields(mode = %request.mode))]
    async fn get_route(&self, request: &RouteRequest) -> Result<Route, RoutingError> {
        request
            .validate()
            .map_err(|e| RoutingError::Validation(e.to_string()))?;

        let url = self.route_url(request)?;
        debug!(path = %url.path(), "Requesting route");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                RoutingError::Timeout {
                    timeout_secs: self.timeout_secs,
                }
            } else {
                warn!(error = %e, "Routing request failed");
                RoutingError::Unavailable
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                RoutingError::Timeout {
                    timeout_secs: self.timeout_secs,
                }
            } else {
                warn!(error = %e, "Failed to read routing response");
                RoutingError::Unavailable
            }
        })?;

        let route = Self::parse_route_response(status, &body)?;
        debug!(
            distance = route.distance_meters,
            duration = route.duration_seconds,
            points = route.geometry.len(),
            "Route found"
        );
        Ok(route)
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Option<Vec<RawRoute>>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    distance: f64,
    duration: f64,
    #[serde(default)]
    geometry: RawGeometry,
}

#[derive(Debug, Default, Deserialize)]
struct RawGeometry {
    #[serde(default)]
    coordinates: Vec<[f64; 2]>,
}
