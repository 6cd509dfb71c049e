use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lexdraft::LexdraftError;
use serde_json::json;

/// Maps generation failures onto HTTP responses: input faults become 400,
/// everything else is reported as an upstream failure (502).
#[derive(Debug)]
pub struct AppError(pub LexdraftError);

impl From<LexdraftError> for AppError {
    fn from(err: LexdraftError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = if self.0.is_client_error() {
            (StatusCode::BAD_REQUEST, self.0.to_string())
        } else {
            tracing::warn!(error = %self.0, "generation failed");
            (StatusCode::BAD_GATEWAY, format!("Generation failed: {}", self.0))
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
