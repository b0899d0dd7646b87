use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize dotenv and structured tracing based on RUST_LOG.
///
/// The `.env` file is optional; existing process variables are never
/// overwritten. Safe to call more than once (later calls keep the first
/// subscriber).
pub fn init_tracing() {
    let env_source = match dotenvy::dotenv() {
        Ok(path) => path.display().to_string(),
        Err(_) => "none".into(),
    };

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=info".into());
    let subscriber = fmt().with_env_filter(EnvFilter::new(filter)).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    tracing::info!("Environment loaded from: {}", env_source);
}

/// Get the bind address for the HTTP server from env or default to 0.0.0.0:8000.
pub fn env_bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into())
}

/// Build the outbound HTTP client with the given overall request timeout.
pub fn build_http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(format!("codesage/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Build a CORS layer from environment variables.
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: "*" or comma-separated origins
/// - CORS_ALLOWED_METHODS: "*" or comma-separated methods
/// - CORS_ALLOWED_HEADERS: "*" or comma-separated request header names
///
/// Defaults are permissive (Any): the expected caller is a browser-hosted UI
/// served from a different origin.
pub fn cors_layer_from_env() -> tower_http::cors::CorsLayer {
    use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

    let mut layer = CorsLayer::new();

    layer = match csv_env("CORS_ALLOWED_ORIGINS") {
        Some(parts) => {
            let vals: Vec<_> = parts
                .iter()
                .filter_map(|p| http::HeaderValue::from_str(p).ok())
                .collect();
            if vals.is_empty() {
                layer.allow_origin(Any)
            } else {
                layer.allow_origin(AllowOrigin::list(vals))
            }
        }
        None => layer.allow_origin(Any),
    };

    layer = match csv_env("CORS_ALLOWED_METHODS") {
        Some(parts) => {
            let vals: Vec<_> = parts
                .iter()
                .filter_map(|p| http::Method::from_bytes(p.to_ascii_uppercase().as_bytes()).ok())
                .collect();
            if vals.is_empty() {
                layer.allow_methods(Any)
            } else {
                layer.allow_methods(AllowMethods::list(vals))
            }
        }
        None => layer.allow_methods(Any),
    };

    layer = match csv_env("CORS_ALLOWED_HEADERS") {
        Some(parts) => {
            let vals: Vec<_> = parts
                .iter()
                .filter_map(|p| http::header::HeaderName::try_from(p.as_str()).ok())
                .collect();
            if vals.is_empty() {
                layer.allow_headers(Any)
            } else {
                layer.allow_headers(AllowHeaders::list(vals))
            }
        }
        None => layer.allow_headers(Any),
    };

    layer
}

/// Reads a comma-separated env var; `None` means unset or the "*" wildcard.
fn csv_env(key: &str) -> Option<Vec<String>> {
    let raw = std::env::var(key).ok()?;
    let raw = raw.trim();
    if raw.is_empty() || raw == "*" {
        return None;
    }
    Some(
        raw.split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect(),
    )
}
