//! Application configuration

use std::path::Path;

use integration_geocoding::GeocodingConfig;
use integration_routing::RoutingConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryConfig;

/// Prefix for environment overrides (e.g. `MAPPY_ROUTING__TIMEOUT_SECS`)
pub const ENV_PREFIX: &str = "MAPPY";

/// Separator between nested keys in environment overrides
pub const ENV_SEPARATOR: &str = "__";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Geocoding providers and rate limiting
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Routing service
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Logging output
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and the process environment
    ///
    /// Without an explicit path, `config.toml` in the working directory is
    /// used if it exists. Environment variables override file values.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or the merged result
    /// does not validate.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Load configuration with an explicit environment map in place of the
    /// process environment
    pub(crate) fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., MAPPY_GEOCODING__MIN_INTERVAL_MS)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .source(env),
            );

        let app: Self = builder.build()?.try_deserialize()?;
        app.validate().map_err(config::ConfigError::Message)?;
        Ok(app)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting, prefixed with its section.
    pub fn validate(&self) -> Result<(), String> {
        self.geocoding
            .validate()
            .map_err(|e| format!("geocoding: {e}"))?;
        self.routing.validate().map_err(|e| format!("routing: {e}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = AppConfig::load_with_env(None, env(&[])).unwrap();
        assert_eq!(config.geocoding.min_interval_ms, 1000);
        assert_eq!(config.geocoding.timeout_secs, 5);
        assert_eq!(config.routing.timeout_secs, 10);
        assert!(config.geocoding.locationiq.access_token.is_none());
        assert!(!config.telemetry.json_logs);
    }

    #[test]
    fn test_file_values() {
        let file = toml_file(
            r#"
            [geocoding]
            min_interval_ms = 250
            language = "fr"

            [geocoding.photon]
            base_url = "http://photon.local"

            [routing]
            base_url = "http://osrm.local:5000"
            "#,
        );

        let config = AppConfig::load_with_env(Some(file.path()), env(&[])).unwrap();
        assert_eq!(config.geocoding.min_interval_ms, 250);
        assert_eq!(config.geocoding.language, "fr");
        assert_eq!(config.geocoding.photon.base_url, "http://photon.local");
        assert_eq!(
            config.geocoding.nominatim.base_url,
            "https://nominatim.openstreetmap.org"
        );
        assert_eq!(config.routing.base_url, "http://osrm.local:5000");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = toml_file("[routing]\ntimeout_secs = 20\n");

        let config = AppConfig::load_with_env(
            Some(file.path()),
            env(&[
                ("MAPPY_ROUTING__TIMEOUT_SECS", "3"),
                ("MAPPY_GEOCODING__MAX_RESULTS", "2"),
            ]),
        )
        .unwrap();
        assert_eq!(config.routing.timeout_secs, 3);
        assert_eq!(config.geocoding.max_results, 2);
    }

    #[test]
    fn test_locationiq_token_from_env() {
        let config = AppConfig::load_with_env(
            None,
            env(&[("MAPPY_GEOCODING__LOCATIONIQ__ACCESS_TOKEN", "pk.from-env")]),
        )
        .unwrap();
        assert_eq!(
            config.geocoding.locationiq.access_token_str(),
            Some("pk.from-env")
        );
        assert!(!format!("{config:?}").contains("pk.from-env"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = AppConfig::load_with_env(
            Some(Path::new("/nonexistent/mappy/config.toml")),
            env(&[]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let file = toml_file("[routing]\ntimeout_secs = 0\n");
        let err = AppConfig::load_with_env(Some(file.path()), env(&[])).unwrap_err();
        assert!(err.to_string().contains("routing"));
    }

    #[test]
    fn test_token_is_never_serialized() {
        let config = AppConfig::load_with_env(
            None,
            env(&[("MAPPY_GEOCODING__LOCATIONIQ__ACCESS_TOKEN", "pk.secret")]),
        )
        .unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("pk.secret"));
    }
}
