//! Raised error kinds seen by the exception classifier.
//!
//! Request handlers return [`AppError`]; each mapper claims the variants it
//! understands, so no runtime type inspection is needed.

use tm_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Security layer refused the request
    #[error("Access denied: {message} {location}")]
    AccessDenied {
        message: String,
        location: ErrorLocation,
    },

    /// Error that already carries an HTTP status (body rejections, routing)
    #[error("HTTP {status}: {message} {location}")]
    Http {
        status: StatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Validation failed: {} violation(s) {location}", violations.len())]
    Validation {
        violations: Vec<FieldViolation>,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Hierarchy(#[from] CoreError),

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl AppError {
    #[track_caller]
    pub fn access_denied<S: Into<String>>(message: S) -> Self {
        Self::AccessDenied {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn http<S: Into<String>>(status: StatusCode, message: S) -> Self {
        Self::Http {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self::Validation {
            violations,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Business-rule failures raised by task/project services.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{entity} {id} not found {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid state: {message} {location}")]
    InvalidState {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid or expired undo token {location}")]
    InvalidUndoToken { location: ErrorLocation },

    #[error("Two-factor authentication required {location}")]
    TwoFactorRequired { location: ErrorLocation },

    #[error("Invalid two-factor code {location}")]
    TwoFactorInvalid { location: ErrorLocation },
}

impl DomainError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(entity: &'static str, id: S) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_state<S: Into<String>>(message: S) -> Self {
        Self::InvalidState {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_undo_token() -> Self {
        Self::InvalidUndoToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn two_factor_required() -> Self {
        Self::TwoFactorRequired {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn two_factor_invalid() -> Self {
        Self::TwoFactorInvalid {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// One failed constraint on one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
