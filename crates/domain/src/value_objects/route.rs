//! Route request and canonical route result

use serde::{Deserialize, Serialize};

use super::coordinate::{Coordinate, InvalidCoordinates};
use super::travel_mode::TravelMode;

/// A request for a route between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Starting point
    pub start: Coordinate,
    /// Destination
    pub end: Coordinate,
    /// Travel mode (`profile` is accepted as an alias)
    #[serde(default, alias = "profile")]
    pub mode: TravelMode,
}

impl RouteRequest {
    /// Create a new route request
    #[must_use]
    pub const fn new(start: Coordinate, end: Coordinate, mode: TravelMode) -> Self {
        Self { start, end, mode }
    }

    /// Check both endpoints
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if either endpoint is out of range
    pub fn validate(&self) -> Result<(), InvalidCoordinates> {
        self.start.validate()?;
        self.end.validate()
    }
}

/// A computed route, as reported by the routing provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Total distance in meters
    pub distance_meters: f64,
    /// Total duration in seconds
    pub duration_seconds: f64,
    /// Path as `[lon, lat]` pairs, in provider order
    pub geometry: Vec<[f64; 2]>,
}
