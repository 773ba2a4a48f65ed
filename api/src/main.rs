mod error_response;
mod handlers;
mod router;

use anyhow::{Context, Result};
use query_relay::{GeminiService, QueryService, RelayConfig};
use std::sync::Arc;

use crate::router::build_router;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Arc::new(RelayConfig::from_env()?);
    if config.credentials().is_err() {
        log::warn!("GEMINI_API_KEY or STORE_ID is not set, /chat will answer 500 until it is");
    }

    let gemini_service = Arc::new(GeminiService::new(&config)?);
    log::info!(
        "Relaying to model {} (timeout {:?})",
        gemini_service.model(),
        config.timeout
    );
    let query_service = Arc::new(QueryService::new(config, gemini_service));

    let port = match std::env::var("PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
        Err(_) => DEFAULT_PORT,
    };

    let app = build_router(query_service);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;
    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
