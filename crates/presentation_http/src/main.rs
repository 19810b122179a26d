//! Weather proxy HTTP server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use application::{ForecastRelay, UpstreamPort, WeatherAggregator};
use infrastructure::{AppConfig, OpenWeatherAdapter, ServerConfig, init_tracing};
use presentation_http::{RequestIdLayer, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let dotenv = dotenvy::dotenv();

    // Load configuration; a broken setting stops startup
    let config =
        AppConfig::load().map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;

    init_tracing(&config.server.log_format);

    info!("Weather proxy v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = dotenv {
        info!(path = %path.display(), "Loaded .env file");
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        upstream = %config.openweather.base_url,
        api_key_configured = config.openweather.has_api_key(),
        "Configuration loaded"
    );
    if !config.openweather.has_api_key() {
        warn!("No API key configured; weather and forecast requests will fail with 500");
    }

    // Initialize upstream adapter
    let adapter = OpenWeatherAdapter::new(&config.openweather)
        .map_err(|e| anyhow::anyhow!("Failed to initialize upstream client: {e}"))?;
    let upstream: Arc<dyn UpstreamPort> = Arc::new(adapter);

    // Initialize services
    let api_key = config.openweather.api_key.clone();
    let state = AppState {
        aggregator: Arc::new(WeatherAggregator::new(
            Arc::clone(&upstream),
            api_key.clone(),
        )),
        forecast: Arc::new(ForecastRelay::new(upstream, api_key)),
    };

    // Build router
    let app = routes::create_router(state, config.server.static_dir.as_deref());

    // Add middleware (order matters: last added = outermost)
    let app = app
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new());

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);
    if let Some(dir) = &config.server.static_dir {
        info!(dir = %dir, "Serving static files");
    }

    presentation_http::serve(
        listener,
        app,
        shutdown_signal(),
        config.server.shutdown_timeout(),
    )
    .await?;

    info!("Server shutdown complete");

    Ok(())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
