//! Geocoding error types

use thiserror::Error;

/// Terminal outcome of a failed resolution
///
/// Display strings are safe to show to end users; provider detail is only logged.
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// The query was rejected before any provider was contacted
    #[error("Invalid query: {0}")]
    Validation(String),

    /// Every configured provider came back empty
    #[error("Location not found. Try being more specific.")]
    NotFound {
        /// The query that could not be resolved
        query: String,
    },

    /// The resolver could not be constructed
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl GeocodingError {
    /// Stable, machine-readable kind for outer layers
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound { .. } => "not_found",
            Self::ConfigurationError(_) => "configuration",
        }
    }
}

/// Why a single provider produced no result
///
/// Never crosses the provider boundary; adapters log it and return `None`.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Request exceeded the provider timeout
    #[error("request timed out")]
    Timeout,

    /// Connection to the provider failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Provider answered with a non-success status
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Response body did not have the expected shape
    #[error("parse error: {0}")]
    ParseError(String),

    /// Provider returned an empty result set
    #[error("no results")]
    NoResults,

    /// Provider answered with an error object instead of results
    #[error("provider error: {0}")]
    Upstream(String),

    /// Best result had coordinates outside the valid ranges
    #[error("result coordinates out of range")]
    InvalidCoordinates,
}
