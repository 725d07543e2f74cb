use crate::{
    AppError, CONFLICT, CYCLIC_HIERARCHY, DUPLICATE_PROJECT_ID, DomainError, ExceptionMapper,
    ExceptionMapping, HIERARCHY_TOO_DEEP, INVALID_STATE, INVALID_UNDO_TOKEN, NOT_FOUND, TWO_FACTOR_INVALID,
    TWO_FACTOR_REQUIRED,
};

use tm_core::CoreError;

use http::StatusCode;

/// Highest-priority mapper: business-rule and hierarchy failures.
pub struct DomainExceptionMapper;

impl DomainExceptionMapper {
    pub const PRIORITY: i32 = 100;

    fn map_domain(error: &DomainError) -> ExceptionMapping {
        match error {
            DomainError::NotFound { entity, id, .. } => ExceptionMapping::new(
                NOT_FOUND,
                format!("{entity} not found"),
                StatusCode::NOT_FOUND,
            )
            .with_detail("entity", *entity)
            .with_detail("id", id.as_str()),
            DomainError::Conflict { message, .. } => {
                ExceptionMapping::new(CONFLICT, message.as_str(), StatusCode::CONFLICT)
            }
            DomainError::InvalidState { message, .. } => ExceptionMapping::new(
                INVALID_STATE,
                message.as_str(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            DomainError::InvalidUndoToken { .. } => ExceptionMapping::new(
                INVALID_UNDO_TOKEN,
                "Undo token is invalid or has expired",
                StatusCode::BAD_REQUEST,
            ),
            DomainError::TwoFactorRequired { .. } => ExceptionMapping::new(
                TWO_FACTOR_REQUIRED,
                "Two-factor authentication code required",
                StatusCode::UNAUTHORIZED,
            ),
            DomainError::TwoFactorInvalid { .. } => ExceptionMapping::new(
                TWO_FACTOR_INVALID,
                "Invalid two-factor authentication code",
                StatusCode::UNAUTHORIZED,
            ),
        }
    }

    fn map_hierarchy(error: &CoreError) -> ExceptionMapping {
        match error {
            CoreError::CyclicHierarchy { project_ids, .. } => ExceptionMapping::new(
                CYCLIC_HIERARCHY,
                "Project parent links form a cycle",
                StatusCode::UNPROCESSABLE_ENTITY,
            )
            .with_detail("projectIds", project_ids.clone()),
            CoreError::DepthExceeded {
                project_id,
                max_depth,
                ..
            } => ExceptionMapping::new(
                HIERARCHY_TOO_DEEP,
                format!("Projects may be nested at most {max_depth} level(s) deep"),
                StatusCode::UNPROCESSABLE_ENTITY,
            )
            .with_detail("projectId", project_id.as_str())
            .with_detail("maxDepth", *max_depth),
            CoreError::DuplicateProjectId { project_id, .. } => ExceptionMapping::new(
                DUPLICATE_PROJECT_ID,
                "Project ids must be unique",
                StatusCode::UNPROCESSABLE_ENTITY,
            )
            .with_detail("projectId", project_id.as_str()),
        }
    }
}

impl ExceptionMapper for DomainExceptionMapper {
    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn name(&self) -> &'static str {
        "domain_exception"
    }

    fn can_handle(&self, error: &AppError) -> bool {
        matches!(error, AppError::Domain(_) | AppError::Hierarchy(_))
    }

    fn map(&self, error: &AppError) -> ExceptionMapping {
        match error {
            AppError::Domain(domain) => Self::map_domain(domain),
            AppError::Hierarchy(core) => Self::map_hierarchy(core),
            _ => ExceptionMapping::internal_error(),
        }
    }
}
