//! REST API error responses
//!
//! Every failure leaves a handler as an [`ApiError`] holding the
//! classifier's mapping, so all endpoints share one JSON error shape:
//! `{errorCode, message, statusCode, details}` with a matching HTTP status.

use tm_classifier::{AppError, ExceptionMapping};

use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};

/// Classified error ready to be sent
#[derive(Debug)]
pub struct ApiError(pub ExceptionMapping);

impl From<ExceptionMapping> for ApiError {
    fn from(mapping: ExceptionMapping) -> Self {
        Self(mapping)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mapping = self.0;
        log::debug!(
            "Responding {} {}: {}",
            mapping.status_code.as_u16(),
            mapping.error_code,
            mapping.message
        );

        (mapping.status_code, Json(mapping)).into_response()
    }
}

/// Body rejections already carry a status; keep it and axum's message.
#[track_caller]
pub fn rejection_to_app_error(rejection: JsonRejection) -> AppError {
    AppError::http(rejection.status(), rejection.body_text())
}

pub type Result<T> = std::result::Result<T, ApiError>;
