//! Service wiring
//!
//! Builds the shared geocoding resolver and route client from [`AppConfig`].

use std::sync::Arc;

use integration_geocoding::{GeocodeResolver, GeocodingError};
use integration_routing::{OsrmRouteClient, RouteClient, RoutingError};
use thiserror::Error;
use tracing::info;

use crate::config::AppConfig;

/// Errors raised while constructing services
#[derive(Debug, Error)]
pub enum ServicesError {
    /// Geocoding stack could not be built
    #[error(transparent)]
    Geocoding(#[from] GeocodingError),

    /// Routing client could not be built
    #[error(transparent)]
    Routing(#[from] RoutingError),
}

/// Long-lived services, cheap to clone and safe to share across tasks
#[derive(Clone)]
pub struct Services {
    /// Place-name resolver with provider fallback
    pub resolver: Arc<GeocodeResolver>,
    /// Route computation client
    pub router: Arc<dyn RouteClient>,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

impl Services {
    /// Build all services from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any section is invalid or an HTTP client
    /// cannot be created.
    pub fn from_config(config: &AppConfig) -> Result<Self, ServicesError> {
        let resolver = GeocodeResolver::from_config(&config.geocoding)?;
        let router = OsrmRouteClient::new(&config.routing)?;

        info!(
            providers = ?resolver.provider_names(),
            routing = %config.routing.base_url,
            "Services initialized"
        );

        Ok(Self {
            resolver: Arc::new(resolver),
            router: Arc::new(router),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_services_skip_locationiq() {
        let services = Services::from_config(&AppConfig::default()).unwrap();
        assert_eq!(services.resolver.provider_names(), ["nominatim", "photon"]);
    }

    #[test]
    fn test_token_enables_locationiq() {
        let mut config = AppConfig::default();
        config.geocoding.locationiq.access_token = Some("pk.test".to_string().into());

        let services = Services::from_config(&config).unwrap();
        assert_eq!(
            services.resolver.provider_names(),
            ["nominatim", "photon", "locationiq"]
        );
    }

    #[test]
    fn test_invalid_routing_config_is_rejected() {
        let mut config = AppConfig::default();
        config.routing.base_url = String::new();

        let err = Services::from_config(&config).unwrap_err();
        assert!(matches!(err, ServicesError::Routing(_)));
    }

    #[test]
    fn test_invalid_geocoding_config_is_rejected() {
        let mut config = AppConfig::default();
        config.geocoding.timeout_secs = 0;

        let err = Services::from_config(&config).unwrap_err();
        assert!(matches!(err, ServicesError::Geocoding(_)));
    }
}
