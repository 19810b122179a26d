//! Domain layer for the weather proxy
//!
//! Request-scoped values exchanged between the HTTP layer and the use cases.
//! Nothing here performs I/O or outlives a single request.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
