use axum::{Json, http::StatusCode, response::IntoResponse};

use bookshelf_core::ApiError;

use crate::app::errors;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Welcome to the Bookshelf API",
    }))
}

/// Demo endpoint: authentication is never satisfied here, so every request
/// exercises the challenge path.
pub async fn protected() -> axum::response::Response {
    errors::error_response(
        ApiError::unauthorized().with_detail("Please provide valid authentication credentials"),
    )
}

/// Demo endpoint: a base error with every optional field overridden at once.
pub async fn custom_error() -> axum::response::Response {
    errors::error_response(
        ApiError::default()
            .with_status(StatusCode::IM_A_TEAPOT)
            .with_detail("I'm a teapot")
            .with_error_code("TEAPOT")
            .with_data(
                "info",
                "This server refuses to brew coffee because it is a teapot",
            ),
    )
}
