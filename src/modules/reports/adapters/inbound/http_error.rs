// Map application errors onto HTTP responses carrying an `error` field.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::modules::reports::application::errors::ApplicationError;

pub fn error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::InvalidParameters(reason) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": reason.to_string() })),
        )
            .into_response(),
        ApplicationError::Snapshot(reason) => {
            tracing::error!(%reason, "report could not be computed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "appointments are temporarily unavailable" })),
            )
                .into_response()
        }
    }
}
