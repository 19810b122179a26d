//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap API.

use std::error::Error as StdError;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Current conditions by city name
pub const CURRENT_WEATHER_PATH: &str = "weather";
/// Air pollution by coordinates
pub const AIR_POLLUTION_PATH: &str = "air_pollution";
/// 5-day / 3-hour forecast by coordinates
pub const FORECAST_PATH: &str = "forecast";

/// OpenWeatherMap client errors
#[derive(Debug, Error)]
pub enum OpenWeatherError {
    /// The HTTP client could not be built
    #[error("Client initialization failed: {0}")]
    ClientInit(String),

    /// Upstream answered with a non-2xx status
    #[error("{message}")]
    Http {
        /// Upstream status code
        status: u16,
        /// Status line and URL without query string
        message: String,
    },

    /// Request could not be sent or no response was received
    #[error("{0}")]
    RequestFailed(String),

    /// Response body was not valid JSON
    #[error("{0}")]
    ParseError(String),
}

/// OpenWeatherMap client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; the transport default applies when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// Raw JSON access to the OpenWeatherMap API
#[async_trait]
pub trait OpenWeatherApi: Send + Sync {
    /// GET `{base_url}/{path}` with the given query parameters
    ///
    /// The credential is expected among `query` as `appid`.
    async fn get_json(&self, path: &str, query: &[(&str, &str)])
    -> Result<Value, OpenWeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, OpenWeatherError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| OpenWeatherError::ClientInit(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, OpenWeatherError> {
        Self::new(OpenWeatherConfig::default())
    }

    /// Base URL this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Status line in the familiar "404 Client Error: Not Found for url: ..." form
    fn status_message(status: StatusCode, url: &reqwest::Url) -> String {
        let kind = if status.is_client_error() {
            "Client"
        } else if status.is_server_error() {
            "Server"
        } else {
            "Unexpected"
        };
        let reason = status.canonical_reason().unwrap_or("Unknown");

        // The query string carries the credential
        let mut url = url.clone();
        url.set_query(None);

        format!("{} {kind} Error: {reason} for url: {url}", status.as_u16())
    }

    /// Flatten a reqwest error and its sources without the request URL
    fn describe(err: reqwest::Error) -> String {
        let err = err.without_url();
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(inner) = source {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            source = inner.source();
        }
        message
    }
}

#[async_trait]
impl OpenWeatherApi for OpenWeatherClient {
    #[instrument(skip(self, query))]
    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, OpenWeatherError> {
        let url = self.build_url(path);
        debug!(url = %url, "Requesting OpenWeatherMap");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| OpenWeatherError::RequestFailed(Self::describe(e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::status_message(status, response.url());
            warn!(status = status.as_u16(), path, "OpenWeatherMap request failed");
            return Err(OpenWeatherError::Http {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| OpenWeatherError::ParseError(Self::describe(e)))
    }
}
