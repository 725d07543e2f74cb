use crate::{
    AppError, BAD_REQUEST, CONFLICT, DEFAULT_MAX_MESSAGE_LENGTH, ExceptionMapper,
    ExceptionMapping, FORBIDDEN, NOT_FOUND, RATE_LIMIT_EXCEEDED, SERVICE_UNAVAILABLE,
    UNAUTHORIZED, VALIDATION_ERROR,
};

use std::borrow::Cow;

use http::StatusCode;

/// Lowest-priority mapper: claims any error that already carries an HTTP
/// status and turns the status into a stable error code.
pub struct HttpExceptionMapper {
    max_message_length: usize,
}

impl HttpExceptionMapper {
    pub const PRIORITY: i32 = 10;

    pub fn new(max_message_length: usize) -> Self {
        Self { max_message_length }
    }

    /// Stable code for a status. Unlisted statuses get `HTTP_<code>`.
    pub fn error_code_for(status: StatusCode) -> Cow<'static, str> {
        match status {
            StatusCode::BAD_REQUEST => Cow::Borrowed(BAD_REQUEST),
            StatusCode::UNAUTHORIZED => Cow::Borrowed(UNAUTHORIZED),
            StatusCode::FORBIDDEN => Cow::Borrowed(FORBIDDEN),
            StatusCode::NOT_FOUND => Cow::Borrowed(NOT_FOUND),
            StatusCode::CONFLICT => Cow::Borrowed(CONFLICT),
            StatusCode::UNPROCESSABLE_ENTITY => Cow::Borrowed(VALIDATION_ERROR),
            StatusCode::TOO_MANY_REQUESTS => Cow::Borrowed(RATE_LIMIT_EXCEEDED),
            StatusCode::SERVICE_UNAVAILABLE => Cow::Borrowed(SERVICE_UNAVAILABLE),
            other => Cow::Owned(format!("HTTP_{}", other.as_u16())),
        }
    }

    /// The error's own message when non-empty, else the status reason phrase.
    fn message_for(&self, status: StatusCode, message: &str) -> String {
        if message.is_empty() {
            return status
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_string();
        }
        message.chars().take(self.max_message_length).collect()
    }
}

impl Default for HttpExceptionMapper {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MESSAGE_LENGTH)
    }
}

impl ExceptionMapper for HttpExceptionMapper {
    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn name(&self) -> &'static str {
        "http_exception"
    }

    fn can_handle(&self, error: &AppError) -> bool {
        matches!(error, AppError::Http { .. })
    }

    fn map(&self, error: &AppError) -> ExceptionMapping {
        match error {
            AppError::Http {
                status, message, ..
            } => ExceptionMapping::new(
                Self::error_code_for(*status),
                self.message_for(*status, message),
                *status,
            ),
            _ => ExceptionMapping::internal_error(),
        }
    }
}
