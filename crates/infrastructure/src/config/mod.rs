//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `openweather`: upstream provider credential and endpoint

mod openweather;
mod server;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use openweather::OpenWeatherAppConfig;
pub use server::ServerConfig;

/// Prefix of structured environment overrides (e.g. `WEATHER_PROXY__SERVER__PORT`)
pub const ENV_PREFIX: &str = "WEATHER_PROXY";

/// Separator between prefix and nested keys in environment overrides
pub const ENV_SEPARATOR: &str = "__";

/// Conventional variable holding the provider credential
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream provider configuration
    #[serde(default)]
    pub openweather: OpenWeatherAppConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Sources, lowest precedence first: built-in defaults, `WEATHER_API_KEY`,
    /// `config.toml` in the working directory, `WEATHER_PROXY__*` variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(std::env::var(API_KEY_VAR).ok(), None)
    }

    fn build(
        api_key: Option<String>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?;

        if let Some(key) = api_key {
            debug!("Using API key from {API_KEY_VAR}");
            builder = builder.set_default("openweather.api_key", key)?;
        }

        let builder = builder
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .source(env),
            );

        builder.build()?.try_deserialize()
    }
}
