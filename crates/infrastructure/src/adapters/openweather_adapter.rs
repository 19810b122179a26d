//! OpenWeatherMap adapter - Implements UpstreamPort using integration_openweather

use application::error::ApplicationError;
use application::ports::{UpstreamEndpoint, UpstreamError, UpstreamPort, UpstreamRequest};
use async_trait::async_trait;
use integration_openweather::{
    AIR_POLLUTION_PATH, CURRENT_WEATHER_PATH, FORECAST_PATH, OpenWeatherApi, OpenWeatherClient,
    OpenWeatherConfig, OpenWeatherError,
};
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::OpenWeatherAppConfig;

/// Adapter for the OpenWeatherMap API
pub struct OpenWeatherAdapter {
    client: OpenWeatherClient,
}

impl std::fmt::Debug for OpenWeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherAdapter")
            .field("base_url", &self.client.base_url())
            .finish()
    }
}

impl OpenWeatherAdapter {
    /// Create a new adapter from application configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &OpenWeatherAppConfig) -> Result<Self, ApplicationError> {
        Self::with_config(config.client_config())
    }

    /// Create with custom client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: OpenWeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config)
            .map_err(|e| ApplicationError::Unexpected(e.to_string()))?;
        Ok(Self { client })
    }

    const fn path_for(endpoint: UpstreamEndpoint) -> &'static str {
        match endpoint {
            UpstreamEndpoint::CurrentWeather => CURRENT_WEATHER_PATH,
            UpstreamEndpoint::AirPollution => AIR_POLLUTION_PATH,
            UpstreamEndpoint::Forecast => FORECAST_PATH,
        }
    }

    /// Map integration error to port error
    fn map_error(err: OpenWeatherError) -> UpstreamError {
        match err {
            OpenWeatherError::Http { status, message } => UpstreamError::Http { status, message },
            OpenWeatherError::ClientInit(e)
            | OpenWeatherError::RequestFailed(e)
            | OpenWeatherError::ParseError(e) => UpstreamError::Transport(e),
        }
    }
}

#[async_trait]
impl UpstreamPort for OpenWeatherAdapter {
    #[instrument(skip(self, request), fields(endpoint = %request.endpoint))]
    async fn fetch_json(&self, request: &UpstreamRequest) -> Result<Value, UpstreamError> {
        let mut query: Vec<(&str, &str)> = request
            .params
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        query.push(("appid", request.api_key.expose_secret()));

        let body = self
            .client
            .get_json(Self::path_for(request.endpoint), &query)
            .await
            .map_err(Self::map_error)?;

        debug!("Upstream response received");
        Ok(body)
    }
}
