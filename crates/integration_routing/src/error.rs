//! Routing error types

use thiserror::Error;

/// Errors that can occur during route computation
///
/// Display strings are generic; provider detail is only logged.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Request rejected before any outbound call
    #[error("Invalid route request: {0}")]
    Validation(String),

    /// Provider reported no route or an empty route list
    #[error("No route found between these locations")]
    NoRoute,

    /// Request exceeded the routing timeout
    #[error("Route request timed out after {timeout_secs} seconds, please try again")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Provider unreachable or answered with something unreadable
    #[error("Routing service unavailable, please try again later")]
    Unavailable,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl RoutingError {
    /// Returns true if retrying the same request may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Unavailable)
    }

    /// Stable, machine-readable kind for outer layers
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NoRoute => "no_route",
            Self::Timeout { .. } => "timeout",
            Self::Unavailable => "unavailable",
            Self::ConfigurationError(_) => "configuration",
        }
    }
}
