use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::client::CompletionProvider;
use crate::error::ApiError;
use crate::extract::extract_completion_text;
use crate::models::api::{ConvertRequest, ConvertResponse, ExplainRequest, ExplainResponse};
use crate::prompt;
use crate::util::cors_layer_from_env;

/// Shared application state: the completion backend behind its capability
/// trait. No per-request state survives a call.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
}

/// Build the Axum router with `/explain`, `/convert`, and the probes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/status", get(status))
        .route("/explain", post(explain))
        .route("/convert", post(convert))
        .with_state(state)
        .layer(cors_layer_from_env())
        .layer(TraceLayer::new_for_http())
}

/// Liveness probe.
async fn healthz() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Service status endpoint to expose the version and available routes.
async fn status() -> impl IntoResponse {
    let routes = vec!["/healthz", "/status", "/explain", "/convert"];
    Json(serde_json::json!({
        "name": "codesage",
        "version": env!("CARGO_PKG_VERSION"),
        "routes": routes
    }))
}

/// Explain the submitted code for the requested audience.
async fn explain(
    State(state): State<AppState>,
    Json(req): Json<ExplainRequest>,
) -> Result<Json<ExplainResponse>, ApiError> {
    req.validate()?;

    let request_id = Uuid::new_v4();
    tracing::info!(
        %request_id,
        audience = req.audience_level.as_str(),
        code_bytes = req.code.len(),
        "explain request"
    );

    let messages = prompt::explain_messages(&req.code, req.audience_level);
    let body = state.provider.complete(&messages).await?;
    let explanation = extract_completion_text(&body);

    tracing::info!(%request_id, response_bytes = explanation.len(), "explain complete");
    Ok(Json(ExplainResponse { explanation }))
}

/// Convert the submitted code between the requested languages.
async fn convert(
    State(state): State<AppState>,
    Json(req): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
    req.validate()?;

    let request_id = Uuid::new_v4();
    tracing::info!(
        %request_id,
        source = %req.source_language.trim(),
        target = %req.target_language.trim(),
        code_bytes = req.code.len(),
        "convert request"
    );

    let messages =
        prompt::convert_messages(&req.code, req.source_language.trim(), req.target_language.trim());
    let body = state.provider.complete(&messages).await?;
    let converted_code = extract_completion_text(&body);

    tracing::info!(%request_id, response_bytes = converted_code.len(), "convert complete");
    Ok(Json(ConvertResponse { converted_code }))
}
