//! Forecast relay service
//!
//! Passes the provider's 5-day / 3-hour forecast through unchanged.

use std::{fmt, sync::Arc};

use domain::ForecastQuery;
use secrecy::SecretString;
use serde_json::Value;
use tracing::{info, instrument};

use super::{map_upstream_error, non_empty_key, require_key};
use crate::{
    error::ApplicationError,
    ports::{UpstreamPort, UpstreamRequest},
};

/// Relays forecast requests to the upstream provider
pub struct ForecastRelay {
    upstream: Arc<dyn UpstreamPort>,
    api_key: Option<SecretString>,
}

impl fmt::Debug for ForecastRelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastRelay")
            .field("api_key_configured", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl ForecastRelay {
    /// Create a new relay
    pub fn new(upstream: Arc<dyn UpstreamPort>, api_key: Option<SecretString>) -> Self {
        Self {
            upstream,
            api_key: non_empty_key(api_key),
        }
    }

    /// Fetch the forecast for the given coordinates
    ///
    /// Upstream 404/401 are not special-cased here; every HTTP failure is
    /// reported with its upstream status.
    #[instrument(skip(self))]
    pub async fn get_forecast(
        &self,
        lat: Option<&str>,
        lon: Option<&str>,
    ) -> Result<Value, ApplicationError> {
        let query = ForecastQuery::new(lat, lon)?;
        let api_key = require_key(self.api_key.as_ref())?;

        info!(lat = query.lat(), lon = query.lon(), "Fetching forecast");
        self.upstream
            .fetch_json(&UpstreamRequest::forecast(&query, api_key))
            .await
            .map_err(map_upstream_error)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ports::{MockUpstreamPort, UpstreamEndpoint, UpstreamError};

    fn relay(mock: MockUpstreamPort) -> ForecastRelay {
        ForecastRelay::new(
            Arc::new(mock),
            Some(SecretString::from("test-key".to_string())),
        )
    }

    fn forecast_body() -> Value {
        json!({
            "cod": "200",
            "cnt": 1,
            "list": [{ "dt": 1_700_000_000, "main": { "temp": 11.0 }, "dt_txt": "2023-11-14 21:00:00" }],
            "city": { "name": "London", "coord": { "lat": 51.5, "lon": -0.1 } }
        })
    }

    #[tokio::test]
    async fn passes_body_through_unchanged() {
        let mut mock = MockUpstreamPort::new();
        mock.expect_fetch_json()
            .withf(|r| {
                r.endpoint == UpstreamEndpoint::Forecast
                    && r.param("lat") == Some("51.5")
                    && r.param("lon") == Some("-0.1")
                    && r.param("units") == Some("metric")
            })
            .times(1)
            .returning(|_| Ok(forecast_body()));

        let body = relay(mock)
            .get_forecast(Some("51.5"), Some("-0.1"))
            .await
            .unwrap();
        assert_eq!(body, forecast_body());
    }

    #[tokio::test]
    async fn missing_coordinates_make_no_call() {
        let mut mock = MockUpstreamPort::new();
        mock.expect_fetch_json().times(0);
        let service = relay(mock);

        let cases = [
            (None, None),
            (Some("51.5"), None),
            (None, Some("-0.1")),
            (Some(""), Some("-0.1")),
            (Some("51.5"), Some("")),
        ];
        for (lat, lon) in cases {
            let err = service.get_forecast(lat, lon).await.unwrap_err();
            assert_eq!(err.status_code(), 400);
            assert_eq!(err.to_string(), "Lat/Lon parameters are required");
        }
    }

    #[tokio::test]
    async fn missing_key_makes_no_call() {
        let mut mock = MockUpstreamPort::new();
        mock.expect_fetch_json().times(0);
        let service = ForecastRelay::new(Arc::new(mock), None);

        let err = service
            .get_forecast(Some("51.5"), Some("-0.1"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "API key is not configured on the server");
    }

    #[tokio::test]
    async fn upstream_404_is_not_special_cased() {
        let mut mock = MockUpstreamPort::new();
        mock.expect_fetch_json().times(1).returning(|_| {
            Err(UpstreamError::Http {
                status: 404,
                message: "404 Client Error: Not Found for url: http://upstream/forecast"
                    .to_string(),
            })
        });

        let err = relay(mock)
            .get_forecast(Some("51.5"), Some("-0.1"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(
            err.to_string(),
            "HTTP Error: 404 Client Error: Not Found for url: http://upstream/forecast"
        );
    }

    #[tokio::test]
    async fn upstream_401_is_not_special_cased() {
        let mut mock = MockUpstreamPort::new();
        mock.expect_fetch_json().times(1).returning(|_| {
            Err(UpstreamError::Http {
                status: 401,
                message: "401 Client Error: Unauthorized".to_string(),
            })
        });

        let err = relay(mock)
            .get_forecast(Some("51.5"), Some("-0.1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::UpstreamHttp { status: 401, .. }));
    }

    #[tokio::test]
    async fn transport_failure_is_unexpected() {
        let mut mock = MockUpstreamPort::new();
        mock.expect_fetch_json()
            .times(1)
            .returning(|_| Err(UpstreamError::Transport("dns error".to_string())));

        let err = relay(mock)
            .get_forecast(Some("51.5"), Some("-0.1"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "An unexpected error occurred: dns error");
    }
}
