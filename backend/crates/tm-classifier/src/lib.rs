pub mod app_error;
pub mod classifier;
pub mod current_user;
pub mod error;
pub mod error_codes;
pub mod exception_mapper;
pub mod exception_mapping;
pub mod mappers;

pub use app_error::{AppError, DomainError, FieldViolation};
pub use classifier::ExceptionClassifier;
pub use current_user::{AuthenticatedUser, CurrentUserProvider};
pub use error::{ClassifierError, Result};
pub use error_codes::{
    BAD_REQUEST, CONFLICT, CYCLIC_HIERARCHY, DUPLICATE_PROJECT_ID, FORBIDDEN, HIERARCHY_TOO_DEEP,
    INTERNAL_ERROR, INVALID_STATE, INVALID_UNDO_TOKEN, NOT_FOUND, RATE_LIMIT_EXCEEDED, SERVICE_UNAVAILABLE,
    TWO_FACTOR_INVALID, TWO_FACTOR_REQUIRED, UNAUTHORIZED, VALIDATION_ERROR,
};
pub use exception_mapper::ExceptionMapper;
pub use exception_mapping::ExceptionMapping;
pub use mappers::access_denied_mapper::AccessDeniedMapper;
pub use mappers::domain_exception_mapper::DomainExceptionMapper;
pub use mappers::http_exception_mapper::HttpExceptionMapper;
pub use mappers::validation_exception_mapper::ValidationExceptionMapper;

/// Longest client-facing message the HTTP mapper passes through
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 200;

#[cfg(test)]
mod tests;
