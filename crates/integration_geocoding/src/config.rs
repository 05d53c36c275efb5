//! Geocoding service configuration

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Upper bound on results requested from any provider
pub const MAX_RESULTS_CAP: u8 = 5;

/// Configuration shared by all geocoding providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Minimum spacing between resolution slots in milliseconds
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u64,

    /// Per-provider request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Number of results to request (capped at 5)
    #[serde(default = "default_max_results")]
    pub max_results: u8,

    /// Language hint sent to providers that support one
    #[serde(default = "default_language")]
    pub language: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Primary provider
    #[serde(default)]
    pub nominatim: NominatimConfig,

    /// Secondary provider
    #[serde(default)]
    pub photon: PhotonConfig,

    /// Tertiary provider
    #[serde(default)]
    pub locationiq: LocationIqConfig,
}

/// Nominatim (OpenStreetMap) endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_nominatim_base_url")]
    pub base_url: String,
}

/// Photon (komoot) endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotonConfig {
    /// Base URL for the Photon API
    #[serde(default = "default_photon_base_url")]
    pub base_url: String,
}

/// LocationIQ endpoint and credentials
#[derive(Clone, Serialize, Deserialize)]
pub struct LocationIqConfig {
    /// Base URL for the LocationIQ API
    #[serde(default = "default_locationiq_base_url")]
    pub base_url: String,

    /// Access token (sensitive - uses SecretString); provider is skipped when unset
    #[serde(default, skip_serializing)]
    pub access_token: Option<SecretString>,
}

impl std::fmt::Debug for LocationIqConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationIqConfig")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &if self.access_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .finish()
    }
}

const fn default_min_interval_ms() -> u64 {
    1000
}

const fn default_timeout_secs() -> u64 {
    5
}

const fn default_max_results() -> u8 {
    MAX_RESULTS_CAP
}

fn default_language() -> String {
    "en".to_string()
}

fn default_user_agent() -> String {
    format!("Mappy/{}", env!("CARGO_PKG_VERSION"))
}

fn default_nominatim_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_photon_base_url() -> String {
    "https://photon.komoot.io".to_string()
}

fn default_locationiq_base_url() -> String {
    "https://us1.locationiq.com".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: default_min_interval_ms(),
            timeout_secs: default_timeout_secs(),
            max_results: default_max_results(),
            language: default_language(),
            user_agent: default_user_agent(),
            nominatim: NominatimConfig::default(),
            photon: PhotonConfig::default(),
            locationiq: LocationIqConfig::default(),
        }
    }
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_nominatim_base_url(),
        }
    }
}

impl Default for PhotonConfig {
    fn default() -> Self {
        Self {
            base_url: default_photon_base_url(),
        }
    }
}

impl Default for LocationIqConfig {
    fn default() -> Self {
        Self {
            base_url: default_locationiq_base_url(),
            access_token: None,
        }
    }
}

impl LocationIqConfig {
    /// Get the access token as a string reference (for API calls)
    #[must_use]
    pub fn access_token_str(&self) -> Option<&str> {
        self.access_token
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|token| !token.is_empty())
    }
}

impl GeocodingConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            min_interval_ms: 0,
            timeout_secs: 2,
            ..Default::default()
        }
    }

    /// Point every provider at one base URL (mock servers)
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        base_url.clone_into(&mut self.nominatim.base_url);
        base_url.clone_into(&mut self.photon.base_url);
        base_url.clone_into(&mut self.locationiq.base_url);
        self
    }

    /// Minimum interval between rate-limiter slots
    #[must_use]
    pub const fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }

    /// Per-provider request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Result limit actually sent to providers
    #[must_use]
    pub fn effective_max_results(&self) -> u8 {
        self.max_results.clamp(1, MAX_RESULTS_CAP)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.max_results == 0 {
            return Err("max_results must be greater than 0".to_string());
        }

        for (name, url) in [
            ("nominatim", &self.nominatim.base_url),
            ("photon", &self.photon.base_url),
            ("locationiq", &self.locationiq.base_url),
        ] {
            if url.is_empty() {
                return Err(format!("{name}.base_url must not be empty"));
            }
        }

        Ok(())
    }
}
