//! Application state shared across handlers

use std::sync::Arc;

use application::{ForecastRelay, WeatherAggregator};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current weather plus air quality for a city
    pub aggregator: Arc<WeatherAggregator>,
    /// Forecast pass-through
    pub forecast: Arc<ForecastRelay>,
}
