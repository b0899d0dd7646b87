use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

/// Classified failure taxonomy for the service.
///
/// Every failure a handler can observe is one of these variants; nothing
/// escapes to the HTTP layer as an opaque panic or an unclassified error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required configuration is missing or unusable. Fatal at startup,
    /// never raised per-request once the service is running.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required request field is missing, empty, or inconsistent.
    /// Rejected before the provider is contacted.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The provider answered with a non-success HTTP status.
    #[error("provider returned HTTP {status}: {detail}")]
    Provider { status: u16, detail: String },

    /// The provider could not be reached (DNS, refused connection, reset).
    #[error("could not reach provider: {0}")]
    Transport(String),

    /// The provider did not answer within the configured request timeout.
    #[error("provider did not respond within {0} seconds")]
    Timeout(u64),

    /// The provider answered 2xx but the body failed a structural check
    /// outside the extractor's best-effort path.
    #[error("provider response could not be interpreted: {0}")]
    MalformedResponse(String),

    /// Anything else. Carries a human-readable message instead of crashing.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status the variant surfaces as.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Provider { .. } | ApiError::Transport(_) | ApiError::MalformedResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            ApiError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Configuration(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({ "error": { "message": self.to_string() } });
        (status, axum::Json(body)).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(format!("serialization failure: {err}"))
    }
}
