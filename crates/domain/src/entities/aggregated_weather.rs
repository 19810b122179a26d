//! Merged current-weather and air-quality view

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Flat response body of `GET /weather`
///
/// Built only when every field was found in the two upstream payloads;
/// there is no partially populated variant. Measurements keep the provider's
/// number representation, so an integer `temp` stays an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedWeather {
    /// Resolved location name
    pub name: String,
    /// Provider icon code of the first weather condition (e.g. "04d")
    pub icon: String,
    /// Description of the first weather condition
    pub description: String,
    /// Temperature in Celsius
    pub temp: Number,
    /// Relative humidity percentage
    pub humidity: Number,
    /// Wind speed in metres per second
    pub speed: Number,
    /// PM2.5 concentration in μg/m³
    pub pm2_5: Number,
    /// Latitude of the resolved location
    pub lat: f64,
    /// Longitude of the resolved location
    pub lon: f64,
}
