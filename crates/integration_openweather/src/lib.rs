//! OpenWeatherMap integration
//!
//! Thin client for the OpenWeatherMap 2.5 API (<https://openweathermap.org/api>).
//! Returns response bodies as untyped JSON and reports non-2xx statuses with
//! their status code.

pub mod client;

pub use client::{
    AIR_POLLUTION_PATH, CURRENT_WEATHER_PATH, FORECAST_PATH, OpenWeatherApi, OpenWeatherClient,
    OpenWeatherConfig, OpenWeatherError,
};
