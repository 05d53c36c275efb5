//! Ordered, rate-limited geocoding resolution
//!
//! One resolution takes one rate-limiter slot, then walks the provider list
//! in priority order and stops at the first provider that yields a location.

use std::sync::Arc;

use domain::Location;
use tracing::{debug, info, instrument, warn};

use crate::config::GeocodingConfig;
use crate::error::GeocodingError;
use crate::locationiq::LocationIqProvider;
use crate::nominatim::NominatimProvider;
use crate::photon::PhotonProvider;
use crate::provider::GeocodingProvider;
use crate::rate_limiter::RateLimiter;

/// Resolves free-text queries using sequential provider fallback
pub struct GeocodeResolver {
    limiter: RateLimiter,
    providers: Vec<Arc<dyn GeocodingProvider>>,
}

impl std::fmt::Debug for GeocodeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodeResolver")
            .field("limiter", &self.limiter)
            .field("providers", &self.provider_names())
            .finish()
    }
}

impl GeocodeResolver {
    /// Create a resolver over an explicit provider order
    #[must_use]
    pub fn new(limiter: RateLimiter, providers: Vec<Arc<dyn GeocodingProvider>>) -> Self {
        Self { limiter, providers }
    }

    /// Build the default chain: Nominatim, then Photon, then LocationIQ
    ///
    /// LocationIQ is left out when no access token is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or an HTTP client
    /// cannot be initialized.
    pub fn from_config(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(GeocodingError::ConfigurationError)?;

        let mut providers: Vec<Arc<dyn GeocodingProvider>> = vec![
            Arc::new(NominatimProvider::new(config)?),
            Arc::new(PhotonProvider::new(config)?),
        ];

        match LocationIqProvider::from_config(config)? {
            Some(locationiq) => providers.push(Arc::new(locationiq)),
            None => warn!("No LocationIQ access token configured, tertiary provider disabled"),
        }

        Ok(Self::new(RateLimiter::new(config.min_interval()), providers))
    }

    /// Provider names in the order they are tried
    #[must_use]
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// The limiter gating this resolver
    #[must_use]
    pub const fn rate_limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Resolve a free-text query to a location
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a blank query (nothing is contacted) and
    /// `NotFound` when every provider comes back empty.
    #[instrument(skip(self))]
    pub async fn resolve(&self, query: &str) -> Result<Location, GeocodingError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodingError::Validation(
                "Please enter a location to search".to_string(),
            ));
        }

        self.limiter.acquire().await;

        for provider in &self.providers {
            debug!(provider = provider.name(), "Trying geocoding provider");
            if let Some(location) = provider.geocode(query).await {
                info!(provider = provider.name(), %location, "Resolved query");
                return Ok(location);
            }
        }

        warn!(
            %query,
            providers = self.providers.len(),
            "All geocoding providers failed"
        );
        Err(GeocodingError::NotFound {
            query: query.to_string(),
        })
    }
}
