//! Weather proxy HTTP presentation layer
//!
//! This crate provides the HTTP API in front of the weather services.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use middleware::RequestIdLayer;
pub use routes::create_router;
pub use server::serve;
pub use state::AppState;
