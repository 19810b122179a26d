//! Adapters implementing application ports

mod openweather_adapter;

pub use openweather_adapter::OpenWeatherAdapter;
