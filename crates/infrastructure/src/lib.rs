//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application's upstream port on top of the OpenWeatherMap
//! client, and owns configuration loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::OpenWeatherAdapter;
pub use config::{AppConfig, OpenWeatherAppConfig, ServerConfig};
pub use telemetry::init_tracing;
