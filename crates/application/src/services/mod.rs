//! Application services - Use case implementations

mod forecast_relay;
mod weather_aggregator;

pub use forecast_relay::ForecastRelay;
pub use weather_aggregator::WeatherAggregator;

use secrecy::{ExposeSecret, SecretString};

use crate::{error::ApplicationError, ports::UpstreamError};

/// Drop empty credentials so "set but blank" behaves like "unset"
fn non_empty_key(api_key: Option<SecretString>) -> Option<SecretString> {
    api_key.filter(|key| !key.expose_secret().is_empty())
}

fn require_key(api_key: Option<&SecretString>) -> Result<&SecretString, ApplicationError> {
    api_key.ok_or_else(ApplicationError::not_configured)
}

/// Generic mapping shared by every upstream call without special cases
fn map_upstream_error(err: UpstreamError) -> ApplicationError {
    match err {
        UpstreamError::Http { status, message } => ApplicationError::upstream_http(status, &message),
        UpstreamError::Transport(message) => ApplicationError::unexpected(message),
    }
}
