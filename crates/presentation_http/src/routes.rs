//! Route definitions

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{handlers, state::AppState};

/// Create the main router
///
/// When `static_dir` is given, paths without a route are served from that
/// directory (the browser page and its assets).
pub fn create_router(state: AppState, static_dir: Option<&str>) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/weather", get(handlers::weather::get_weather))
        .route("/forecast", get(handlers::forecast::get_forecast))
        .with_state(state);

    match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}
