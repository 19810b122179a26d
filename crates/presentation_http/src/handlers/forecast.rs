//! Forecast handler

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;
use tracing::instrument;

use super::common::QueryParams;
use crate::{error::ApiError, state::AppState};

/// `GET /forecast?lat=<lat>&lon=<lon>`, upstream body returned as-is
#[instrument(skip(state, params))]
pub async fn get_forecast(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Value>, ApiError> {
    let forecast = state
        .forecast
        .get_forecast(params.first("lat"), params.first("lon"))
        .await?;
    Ok(Json(forecast))
}
