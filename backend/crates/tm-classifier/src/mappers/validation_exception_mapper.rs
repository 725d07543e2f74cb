use crate::{AppError, ExceptionMapper, ExceptionMapping, FieldViolation, VALIDATION_ERROR};

use http::StatusCode;
use serde_json::{Map, Value};

/// Maps input validation failures to 422 with per-field messages:
/// `details.errors = { field: [message, ...] }`.
pub struct ValidationExceptionMapper;

impl ValidationExceptionMapper {
    pub const PRIORITY: i32 = 50;

    fn group_by_field(violations: &[FieldViolation]) -> Map<String, Value> {
        let mut errors = Map::new();
        for violation in violations {
            let entry = errors
                .entry(violation.field.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(messages) = entry {
                messages.push(Value::String(violation.message.clone()));
            }
        }
        errors
    }
}

impl ExceptionMapper for ValidationExceptionMapper {
    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn name(&self) -> &'static str {
        "validation_exception"
    }

    fn can_handle(&self, error: &AppError) -> bool {
        matches!(error, AppError::Validation { .. })
    }

    fn map(&self, error: &AppError) -> ExceptionMapping {
        match error {
            AppError::Validation { violations, .. } => ExceptionMapping::new(
                VALIDATION_ERROR,
                "Validation failed",
                StatusCode::UNPROCESSABLE_ENTITY,
            )
            .with_detail("errors", Value::Object(Self::group_by_field(violations))),
            _ => ExceptionMapping::internal_error(),
        }
    }
}
