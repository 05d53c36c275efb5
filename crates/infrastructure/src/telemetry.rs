//! Log subscriber initialization
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for log output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (e.g., "warn", "integration_geocoding=debug")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit one JSON object per event instead of human-readable lines
    #[serde(default)]
    pub json_logs: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Filter directive to use when `RUST_LOG` is unset
    #[must_use]
    pub fn effective_filter<'a>(&'a self, override_filter: Option<&'a str>) -> &'a str {
        override_filter.unwrap_or(&self.log_filter)
    }
}

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence; otherwise `override_filter` (typically
/// derived from CLI verbosity) and finally `config.log_filter` are used.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(
    config: &TelemetryConfig,
    override_filter: Option<&str>,
) -> Result<(), TelemetryError> {
    let filter = config.effective_filter(override_filter);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    }

    debug!(filter, json = config.json_logs, "Logging initialized");
    Ok(())
}
