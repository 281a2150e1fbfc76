//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvelopeError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("render: {0}")]
    Render(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for EnvelopeError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            EnvelopeError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            EnvelopeError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "render_error"),
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
