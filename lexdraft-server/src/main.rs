//! lexdraft-server: HTTP front for document generation.
//!
//! Reads config from env vars (a `.env` file is loaded first when present):
//!   OLLAMA_URL, MODEL_NAME, REQUEST_TIMEOUT, TEMPERATURE, TOP_P, NUM_PREDICT
//!   LEXDRAFT_BIND_ADDR: listen address (default: 0.0.0.0:8000)

use std::sync::Arc;

use lexdraft::{BackendConfig, LegalAssistant};
use lexdraft_server::build_router;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lexdraft=debug,lexdraft_llm=debug".into()),
        )
        .init();

    let config = BackendConfig::from_env()?;
    let bind_addr =
        std::env::var("LEXDRAFT_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());

    let assistant = Arc::new(LegalAssistant::from_config(&config)?);
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        %bind_addr,
        backend = %config.url,
        model = %config.model,
        "lexdraft server listening"
    );

    axum::serve(listener, build_router(assistant)).await?;
    Ok(())
}
