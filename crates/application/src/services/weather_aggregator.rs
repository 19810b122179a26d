//! Weather aggregation service
//!
//! Combines the current-weather and air-quality responses for a city into a
//! single flat `AggregatedWeather`.

use std::{fmt, sync::Arc};

use domain::{AggregatedWeather, CoordinatePair, WeatherQuery};
use secrecy::SecretString;
use serde::Deserialize;
use serde_json::{Number, Value};
use tracing::{debug, info, instrument, warn};

use super::{map_upstream_error, non_empty_key, require_key};
use crate::{
    error::ApplicationError,
    ports::{UpstreamError, UpstreamPort, UpstreamRequest},
};

#[derive(Debug, Deserialize)]
struct CurrentWeatherPayload {
    name: String,
    weather: Vec<ConditionPayload>,
    main: MainPayload,
    wind: WindPayload,
}

#[derive(Debug, Deserialize)]
struct ConditionPayload {
    icon: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainPayload {
    temp: Number,
    humidity: Number,
}

#[derive(Debug, Deserialize)]
struct WindPayload {
    speed: Number,
}

#[derive(Debug, Deserialize)]
struct AirQualityPayload {
    list: Vec<AirQualityEntry>,
}

#[derive(Debug, Deserialize)]
struct AirQualityEntry {
    components: ComponentsPayload,
}

#[derive(Debug, Deserialize)]
struct ComponentsPayload {
    pm2_5: Number,
}

/// Aggregates current weather and air quality for a city
pub struct WeatherAggregator {
    upstream: Arc<dyn UpstreamPort>,
    api_key: Option<SecretString>,
}

impl fmt::Debug for WeatherAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherAggregator")
            .field("api_key_configured", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl WeatherAggregator {
    /// Create a new aggregator
    ///
    /// An absent or empty `api_key` is accepted here; every call then fails
    /// with `ServerMisconfigured`.
    pub fn new(upstream: Arc<dyn UpstreamPort>, api_key: Option<SecretString>) -> Self {
        Self {
            upstream,
            api_key: non_empty_key(api_key),
        }
    }

    /// Fetch current weather for `city`, then air quality at its coordinates
    #[instrument(skip(self))]
    pub async fn get_weather(
        &self,
        city: Option<&str>,
    ) -> Result<AggregatedWeather, ApplicationError> {
        let query = WeatherQuery::new(city)?;
        let api_key = require_key(self.api_key.as_ref())?;

        info!(city = query.city(), "Fetching current weather");
        let current = self
            .upstream
            .fetch_json(&UpstreamRequest::current_weather(&query, api_key))
            .await
            .map_err(|e| map_current_weather_error(e, query.city()))?;

        let coord = extract_coordinates(&current)?;
        debug!(%coord, "Fetching air quality");

        let air_quality = self
            .upstream
            .fetch_json(&UpstreamRequest::air_pollution(coord, api_key))
            .await
            .map_err(map_upstream_error)?;

        merge(current, air_quality, coord)
    }
}

/// City lookups get dedicated 404/401 messages; everything else is generic
fn map_current_weather_error(err: UpstreamError, city: &str) -> ApplicationError {
    match err {
        UpstreamError::Http { status: 404, .. } => {
            warn!(city, "City not found upstream");
            ApplicationError::city_not_found(city)
        },
        UpstreamError::Http { status: 401, .. } => {
            warn!("Upstream rejected the API key");
            ApplicationError::Unauthorized(ApplicationError::API_KEY_NOT_AUTHORIZED.to_string())
        },
        other => map_upstream_error(other),
    }
}

fn extract_coordinates(current: &Value) -> Result<CoordinatePair, ApplicationError> {
    let coord = current
        .get("coord")
        .cloned()
        .ok_or_else(|| ApplicationError::unexpected("missing field `coord`"))?;
    serde_json::from_value(coord).map_err(ApplicationError::unexpected)
}

fn merge(
    current: Value,
    air_quality: Value,
    coord: CoordinatePair,
) -> Result<AggregatedWeather, ApplicationError> {
    let current: CurrentWeatherPayload =
        serde_json::from_value(current).map_err(ApplicationError::unexpected)?;
    let air_quality: AirQualityPayload =
        serde_json::from_value(air_quality).map_err(ApplicationError::unexpected)?;

    let condition = current
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| ApplicationError::unexpected("empty `weather` list"))?;
    let pollution = air_quality
        .list
        .into_iter()
        .next()
        .ok_or_else(|| ApplicationError::unexpected("empty `list` in air quality response"))?;

    Ok(AggregatedWeather {
        name: current.name,
        icon: condition.icon,
        description: condition.description,
        temp: current.main.temp,
        humidity: current.main.humidity,
        speed: current.wind.speed,
        pm2_5: pollution.components.pm2_5,
        lat: coord.lat,
        lon: coord.lon,
    })
}
