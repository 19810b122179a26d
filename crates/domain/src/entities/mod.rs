//! Domain entities

mod aggregated_weather;

pub use aggregated_weather::AggregatedWeather;
