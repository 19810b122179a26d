//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod upstream_port;

#[cfg(test)]
pub use upstream_port::MockUpstreamPort;
pub use upstream_port::{
    METRIC_UNITS, UpstreamEndpoint, UpstreamError, UpstreamPort, UpstreamRequest,
};
