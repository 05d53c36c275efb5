//! Canonical geocoding result

use serde::Serialize;
use std::fmt;

use super::coordinate::{Coordinate, InvalidCoordinates};

/// A resolved place: coordinates plus a human-readable name
///
/// Every geocoding provider's response is normalized into this shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    /// Latitude in degrees (-90 to 90)
    #[serde(rename = "lat")]
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    #[serde(rename = "lon")]
    longitude: f64,
    /// Display name, never empty
    display_name: String,
}

impl Location {
    /// Create a new location with validation
    ///
    /// When `display_name` is blank, `fallback_name` is used instead.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(
        latitude: f64,
        longitude: f64,
        display_name: Option<String>,
        fallback_name: &str,
    ) -> Result<Self, InvalidCoordinates> {
        Coordinate::new(latitude, longitude)?;

        let display_name = display_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| fallback_name.trim().to_string());

        Ok(Self {
            latitude,
            longitude,
            display_name,
        })
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Get the display name
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The position of this location as a routable coordinate
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new_unchecked(self.latitude, self.longitude)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.6}, {:.6})",
            self.display_name, self.latitude, self.longitude
        )
    }
}
