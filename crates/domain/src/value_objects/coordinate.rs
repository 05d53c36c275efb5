//! Geographic coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A bare geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lon: f64,
}

/// Error type for invalid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
pub struct InvalidCoordinates;

impl Coordinate {
    /// Create a new coordinate with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if either value is out of range or not finite
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidCoordinates> {
        let coordinate = Self { lat, lon };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Create a coordinate without validation (for trusted sources)
    #[must_use]
    pub const fn new_unchecked(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check range invariants
    ///
    /// Fields are public so deserialized values must be checked explicitly.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if either value is out of range or not finite
    pub fn validate(&self) -> Result<(), InvalidCoordinates> {
        // RangeInclusive::contains is false for NaN
        if !(-90.0..=90.0).contains(&self.lat) || !(-180.0..=180.0).contains(&self.lon) {
            return Err(InvalidCoordinates);
        }
        Ok(())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

impl std::str::FromStr for Coordinate {
    type Err = String;

    /// Parse `"lat,lon"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| format!("Expected 'lat,lon', got '{s}'"))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| format!("Invalid latitude: '{}'", lat.trim()))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| format!("Invalid longitude: '{}'", lon.trim()))?;
        Self::new(lat, lon).map_err(|e| e.to_string())
    }
}
