//! Value Objects - Immutable, identity-less domain primitives

mod coordinate_pair;
mod forecast_query;
mod weather_query;

pub use coordinate_pair::CoordinatePair;
pub use forecast_query::ForecastQuery;
pub use weather_query::WeatherQuery;
