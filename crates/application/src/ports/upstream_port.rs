//! Upstream weather provider port
//!
//! A single generic JSON fetch. Callers decide which endpoint and parameters
//! to use and how to interpret failures.

use std::fmt;

use async_trait::async_trait;
use domain::{CoordinatePair, ForecastQuery, WeatherQuery};
#[cfg(test)]
use mockall::automock;
use secrecy::SecretString;
use serde_json::Value;
use thiserror::Error;

/// Unit system requested from every endpoint that supports one
pub const METRIC_UNITS: &str = "metric";

/// Upstream failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-2xx status
    #[error("{message}")]
    Http { status: u16, message: String },

    /// No usable response (DNS, connect, timeout, undecodable body)
    #[error("{0}")]
    Transport(String),
}

/// Provider endpoints the proxy talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpstreamEndpoint {
    /// Current conditions by city name
    CurrentWeather,
    /// Air pollution by coordinates
    AirPollution,
    /// 5-day / 3-hour forecast by coordinates
    Forecast,
}

impl UpstreamEndpoint {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentWeather => "weather",
            Self::AirPollution => "air_pollution",
            Self::Forecast => "forecast",
        }
    }
}

impl fmt::Display for UpstreamEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound request: endpoint, query parameters and the credential
///
/// The credential is kept apart from `params` so it never shows up in
/// `Debug` output or logs.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub endpoint: UpstreamEndpoint,
    pub params: Vec<(&'static str, String)>,
    pub api_key: SecretString,
}

impl UpstreamRequest {
    /// Current weather for a city, metric units
    #[must_use]
    pub fn current_weather(query: &WeatherQuery, api_key: &SecretString) -> Self {
        Self {
            endpoint: UpstreamEndpoint::CurrentWeather,
            params: vec![
                ("q", query.city().to_string()),
                ("units", METRIC_UNITS.to_string()),
            ],
            api_key: api_key.clone(),
        }
    }

    /// Air pollution at the given coordinates
    #[must_use]
    pub fn air_pollution(coord: CoordinatePair, api_key: &SecretString) -> Self {
        Self {
            endpoint: UpstreamEndpoint::AirPollution,
            params: vec![("lat", coord.lat.to_string()), ("lon", coord.lon.to_string())],
            api_key: api_key.clone(),
        }
    }

    /// Forecast at the given (unparsed) coordinates, metric units
    #[must_use]
    pub fn forecast(query: &ForecastQuery, api_key: &SecretString) -> Self {
        Self {
            endpoint: UpstreamEndpoint::Forecast,
            params: vec![
                ("lat", query.lat().to_string()),
                ("lon", query.lon().to_string()),
                ("units", METRIC_UNITS.to_string()),
            ],
            api_key: api_key.clone(),
        }
    }

    /// Look up a query parameter by name
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Port for fetching raw JSON documents from the weather provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UpstreamPort: Send + Sync {
    /// Perform a GET and decode the body as JSON
    async fn fetch_json(&self, request: &UpstreamRequest) -> Result<Value, UpstreamError>;
}
