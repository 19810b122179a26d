//! Application layer - Use cases and orchestration
//!
//! Holds the weather aggregation and forecast relay use cases together with
//! the port they use to reach the upstream provider.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
