//! Current-weather query value object

use crate::errors::DomainError;

/// A validated, non-empty city lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
}

impl WeatherQuery {
    /// Build a query from the raw `city` parameter
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingParameter` if the city is absent or empty.
    pub fn new(city: Option<&str>) -> Result<Self, DomainError> {
        match city {
            Some(city) if !city.is_empty() => Ok(Self {
                city: city.to_string(),
            }),
            _ => Err(DomainError::MissingParameter(DomainError::CITY_REQUIRED)),
        }
    }

    /// The city exactly as the client sent it
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }
}
