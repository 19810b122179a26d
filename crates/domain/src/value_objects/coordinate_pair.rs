//! Coordinate pair value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Latitude/longitude as reported by the current-weather response
///
/// No range validation is applied: the values come straight from the
/// upstream provider and are only used to build the air-quality request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinatePair {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl CoordinatePair {
    /// Create a coordinate pair
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for CoordinatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}
