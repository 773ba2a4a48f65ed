use axum::{
    routing::{get, post},
    Router,
};
use query_relay::QueryService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{chat, health};

pub fn build_router(service: Arc<QueryService>) -> Router {
    // Browser frontends call this from anywhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/chat", post(chat))
        .layer(cors)
        .with_state(service)
}
