use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use query_relay::{ConfigError, ErrorDetail};

/// The one failure `/chat` reports as an HTTP error.
pub struct ConfigFailure(pub ConfigError);

impl From<ConfigError> for ConfigFailure {
    fn from(err: ConfigError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ConfigFailure {
    fn into_response(self) -> Response {
        log::error!("Rejecting chat request: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDetail {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
