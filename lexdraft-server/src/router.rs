use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use lexdraft::LegalAssistant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;

pub type SharedAssistant = Arc<LegalAssistant>;

pub fn build_router(assistant: SharedAssistant) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/legal/", post(handlers::generate))
        .route("/legal/stream", post(handlers::generate_stream))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(assistant)
}
