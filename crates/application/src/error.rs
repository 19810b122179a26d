//! Application-level errors
//!
//! Every variant's `Display` output is the exact message shown to clients.

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (missing request parameters)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Upstream rejected the credential
    #[error("{0}")]
    Unauthorized(String),

    /// City could not be resolved upstream
    #[error("{0}")]
    NotFound(String),

    /// Upstream answered with any other non-2xx status
    #[error("{message}")]
    UpstreamHttp {
        /// Status code forwarded to the client
        status: u16,
        /// Client-facing message
        message: String,
    },

    /// Credential is not configured locally
    #[error("{0}")]
    ServerMisconfigured(String),

    /// Network failure, undecodable payload or missing field during merge
    #[error("{0}")]
    Unexpected(String),
}

impl ApplicationError {
    /// Message returned when no credential is configured
    pub const API_KEY_NOT_CONFIGURED: &'static str = "API key is not configured on the server";

    /// Message returned when the upstream rejects the credential
    pub const API_KEY_NOT_AUTHORIZED: &'static str = "API key not authorized.";

    /// Credential missing on this server
    pub fn not_configured() -> Self {
        Self::ServerMisconfigured(Self::API_KEY_NOT_CONFIGURED.to_string())
    }

    /// City lookup returned 404
    pub fn city_not_found(city: &str) -> Self {
        Self::NotFound(format!("City not found: {city}"))
    }

    /// Upstream non-2xx response, status forwarded
    pub fn upstream_http(status: u16, message: &str) -> Self {
        Self::UpstreamHttp {
            status,
            message: format!("HTTP Error: {message}"),
        }
    }

    /// Catch-all 500
    pub fn unexpected(message: impl std::fmt::Display) -> Self {
        Self::Unexpected(format!("An unexpected error occurred: {message}"))
    }

    /// HTTP status code carried by this error
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Domain(DomainError::MissingParameter(_)) => 400,
            Self::Unauthorized(_) => 401,
            Self::NotFound(_) => 404,
            Self::UpstreamHttp { status, .. } => *status,
            Self::ServerMisconfigured(_) | Self::Unexpected(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_is_bad_request() {
        let err: ApplicationError =
            DomainError::MissingParameter(DomainError::CITY_REQUIRED).into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "City parameter is required");
    }

    #[test]
    fn not_configured_message() {
        let err = ApplicationError::not_configured();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "API key is not configured on the server");
    }

    #[test]
    fn city_not_found_message() {
        let err = ApplicationError::city_not_found("Nowhereville");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "City not found: Nowhereville");
    }

    #[test]
    fn upstream_http_forwards_status() {
        let err = ApplicationError::upstream_http(503, "503 Server Error: Service Unavailable");
        assert_eq!(err.status_code(), 503);
        assert_eq!(
            err.to_string(),
            "HTTP Error: 503 Server Error: Service Unavailable"
        );
    }

    #[test]
    fn unexpected_prefixes_message() {
        let err = ApplicationError::unexpected("missing field `coord`");
        assert_eq!(err.status_code(), 500);
        assert_eq!(
            err.to_string(),
            "An unexpected error occurred: missing field `coord`"
        );
    }

    #[test]
    fn unauthorized_status() {
        let err = ApplicationError::Unauthorized(ApplicationError::API_KEY_NOT_AUTHORIZED.into());
        assert_eq!(err.status_code(), 401);
    }
}
