//! Forecast query value object

use crate::errors::DomainError;

/// Latitude/longitude strings forwarded verbatim to the forecast endpoint
///
/// Only presence is checked; numeric format is left to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastQuery {
    lat: String,
    lon: String,
}

impl ForecastQuery {
    /// Build a query from the raw `lat`/`lon` parameters
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingParameter` if either value is absent or empty.
    pub fn new(lat: Option<&str>, lon: Option<&str>) -> Result<Self, DomainError> {
        match (lat, lon) {
            (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => Ok(Self {
                lat: lat.to_string(),
                lon: lon.to_string(),
            }),
            _ => Err(DomainError::MissingParameter(
                DomainError::LAT_LON_REQUIRED,
            )),
        }
    }

    #[must_use]
    pub fn lat(&self) -> &str {
        &self.lat
    }

    #[must_use]
    pub fn lon(&self) -> &str {
        &self.lon
    }
}
