use crate::INTERNAL_ERROR;

use http::StatusCode;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Message used whenever an error reaches no mapper
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Client-facing classification of an error.
/// Serializes as `{errorCode, message, statusCode, details}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionMapping {
    /// Machine-readable code (e.g., "NOT_FOUND")
    pub error_code: String,
    pub message: String,
    #[serde(serialize_with = "serialize_status")]
    pub status_code: StatusCode,
    /// Supplementary data, `{}` when empty
    pub details: Map<String, Value>,
}

impl ExceptionMapping {
    pub fn new(
        error_code: impl Into<String>,
        message: impl Into<String>,
        status_code: StatusCode,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            status_code,
            details: Map::new(),
        }
    }

    /// Fallback for errors no mapper claims. Never echoes the original message.
    pub fn internal_error() -> Self {
        Self::new(
            INTERNAL_ERROR,
            GENERIC_ERROR_MESSAGE,
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn with_details(mut self, details: Map<String, Value>) -> Self {
        self.details = details;
        self
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code.is_server_error()
    }
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}
