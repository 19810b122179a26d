//! Tracing subscriber setup

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "weather_proxy_server=debug,tower_http=debug,info";

/// Install the global tracing subscriber
///
/// `log_format` selects structured JSON output when set to `"json"`,
/// human-readable text otherwise.
pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    if is_json(log_format) {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

fn is_json(log_format: &str) -> bool {
    log_format.trim().eq_ignore_ascii_case("json")
}
