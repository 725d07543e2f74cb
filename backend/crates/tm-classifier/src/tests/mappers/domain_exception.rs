use crate::{AppError, DomainError, DomainExceptionMapper, ExceptionMapper};

use std::panic::Location;

use error_location::ErrorLocation;
use http::StatusCode;
use serde_json::json;
use tm_core::CoreError;

#[test]
fn given_domain_mapper_then_priority_is_100() {
    assert_eq!(DomainExceptionMapper::PRIORITY, 100);
    assert_eq!(DomainExceptionMapper.priority(), 100);
}

#[test]
fn given_domain_and_hierarchy_errors_then_can_handle() {
    let hierarchy = AppError::from(CoreError::DuplicateProjectId {
        project_id: "p1".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    assert!(DomainExceptionMapper.can_handle(&AppError::from(DomainError::conflict("x"))));
    assert!(DomainExceptionMapper.can_handle(&hierarchy));
    assert!(!DomainExceptionMapper.can_handle(&AppError::access_denied("x")));
    assert!(!DomainExceptionMapper.can_handle(&AppError::internal("x")));
}

#[test]
fn given_not_found_when_mapped_then_404_with_entity_details() {
    // Given
    let error = AppError::from(DomainError::not_found("Task", "t-42"));

    // When
    let mapping = DomainExceptionMapper.map(&error);

    // Then
    assert_eq!(mapping.error_code, "NOT_FOUND");
    assert_eq!(mapping.message, "Task not found");
    assert_eq!(mapping.status_code, StatusCode::NOT_FOUND);
    assert_eq!(mapping.details["entity"], json!("Task"));
    assert_eq!(mapping.details["id"], json!("t-42"));
}

#[test]
fn given_each_domain_error_when_mapped_then_expected_code_and_status() {
    let cases = [
        (DomainError::conflict("Tag exists"), "CONFLICT", StatusCode::CONFLICT),
        (
            DomainError::invalid_state("Task already completed"),
            "INVALID_STATE",
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        (
            DomainError::invalid_undo_token(),
            "INVALID_UNDO_TOKEN",
            StatusCode::BAD_REQUEST,
        ),
        (
            DomainError::two_factor_required(),
            "TWO_FACTOR_REQUIRED",
            StatusCode::UNAUTHORIZED,
        ),
        (
            DomainError::two_factor_invalid(),
            "TWO_FACTOR_INVALID",
            StatusCode::UNAUTHORIZED,
        ),
    ];

    for (domain, code, status) in cases {
        let mapping = DomainExceptionMapper.map(&AppError::from(domain));
        assert_eq!(mapping.error_code, code);
        assert_eq!(mapping.status_code, status);
    }
}

#[test]
fn given_conflict_when_mapped_then_message_passed_through() {
    let mapping = DomainExceptionMapper.map(&AppError::from(DomainError::conflict("Tag exists")));

    assert_eq!(mapping.message, "Tag exists");
}

#[test]
fn given_cyclic_hierarchy_when_mapped_then_422_with_project_ids() {
    // Given
    let error = AppError::from(CoreError::CyclicHierarchy {
        project_ids: vec!["a".into(), "b".into()],
        location: ErrorLocation::from(Location::caller()),
    });

    // When
    let mapping = DomainExceptionMapper.map(&error);

    // Then
    assert_eq!(mapping.error_code, "CYCLIC_HIERARCHY");
    assert_eq!(mapping.status_code, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(mapping.details["projectIds"], json!(["a", "b"]));
}

#[test]
fn given_duplicate_project_id_when_mapped_then_422_with_project_id() {
    let error = AppError::from(CoreError::DuplicateProjectId {
        project_id: "p1".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let mapping = DomainExceptionMapper.map(&error);

    assert_eq!(mapping.error_code, "DUPLICATE_PROJECT_ID");
    assert_eq!(mapping.details["projectId"], json!("p1"));
}

#[test]
fn given_depth_exceeded_when_mapped_then_422_with_limit() {
    // Given
    let error = AppError::from(CoreError::DepthExceeded {
        project_id: "n101".into(),
        max_depth: 100,
        location: ErrorLocation::from(Location::caller()),
    });

    // When
    let mapping = DomainExceptionMapper.map(&error);

    // Then
    assert_eq!(mapping.error_code, "HIERARCHY_TOO_DEEP");
    assert_eq!(mapping.status_code, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(mapping.message, "Projects may be nested at most 100 level(s) deep");
    assert_eq!(mapping.details["projectId"], json!("n101"));
    assert_eq!(mapping.details["maxDepth"], json!(100));
}
