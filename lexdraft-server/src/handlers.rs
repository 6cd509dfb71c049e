//! Endpoints:
//!   GET  /health        liveness check
//!   POST /legal/        generate a whole document
//!   POST /legal/stream  stream the document as plain text

use std::convert::Infallible;
use std::future;

use axum::{
    body::Body,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use futures::StreamExt;
use lexdraft::DocumentRequest;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::router::SharedAssistant;

#[derive(Debug, Serialize)]
pub struct LegalResponse {
    pub response: String,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn generate(
    State(assistant): State<SharedAssistant>,
    Json(request): Json<DocumentRequest>,
) -> Result<Json<LegalResponse>, AppError> {
    request.require_parties()?;
    let response = assistant.generate(&request).await?;
    Ok(Json(LegalResponse { response }))
}

/// Input faults are rejected before the body starts. Once streaming, a backend
/// failure is appended as a `[STREAM ERROR]` line and the body ends.
pub async fn generate_stream(
    State(assistant): State<SharedAssistant>,
    Json(request): Json<DocumentRequest>,
) -> Result<Response, AppError> {
    request.require_parties()?;
    let chunks = assistant.generate_stream_shared(request)?;
    let body = chunks
        .scan(false, |failed, item| {
            let next = if *failed {
                None
            } else {
                Some(item.unwrap_or_else(|err| {
                    *failed = true;
                    tracing::warn!(error = %err, "stream generation failed");
                    format!("\n[STREAM ERROR] {err}")
                }))
            };
            future::ready(next)
        })
        .map(Ok::<_, Infallible>);

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        Body::from_stream(body),
    )
        .into_response())
}
