//! Current weather handler

use axum::{
    Json,
    extract::{Query, State},
};
use domain::AggregatedWeather;
use tracing::instrument;

use super::common::QueryParams;
use crate::{error::ApiError, state::AppState};

/// `GET /weather?city=<city>`
#[instrument(skip(state, params))]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<AggregatedWeather>, ApiError> {
    let weather = state.aggregator.get_weather(params.first("city")).await?;
    Ok(Json(weather))
}
