//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required request parameter was absent or empty
    #[error("{0}")]
    MissingParameter(&'static str),
}

impl DomainError {
    /// Message used when `/weather` is called without a city
    pub const CITY_REQUIRED: &'static str = "City parameter is required";

    /// Message used when `/forecast` is called without both coordinates
    pub const LAT_LON_REQUIRED: &'static str = "Lat/Lon parameters are required";
}
