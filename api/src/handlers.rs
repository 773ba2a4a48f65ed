use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use query_relay::{HealthResponse, QueryRequest, QueryService};
use std::sync::Arc;

use crate::error_response::ConfigFailure;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::alive())
}

// Configuration is checked before the body so a misconfigured relay answers
// 500 whatever the client sent.
pub async fn chat(
    State(service): State<Arc<QueryService>>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Response {
    let credentials = match service.credentials() {
        Ok(credentials) => credentials,
        Err(e) => return ConfigFailure::from(e).into_response(),
    };

    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            log::info!("Rejected chat body: {}", rejection.body_text());
            return rejection.into_response();
        }
    };

    Json(service.answer(credentials, &request.query).await).into_response()
}
