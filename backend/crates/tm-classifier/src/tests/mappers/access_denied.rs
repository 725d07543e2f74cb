use crate::tests::{anonymous, logged_in};
use crate::{AccessDeniedMapper, AppError, DomainError, ExceptionMapper};

use http::StatusCode;

#[test]
fn given_access_denied_mapper_then_priority_is_75() {
    let mapper = AccessDeniedMapper::new(anonymous());

    assert_eq!(AccessDeniedMapper::PRIORITY, 75);
    assert_eq!(mapper.priority(), 75);
}

#[test]
fn given_access_denied_error_then_can_handle() {
    let mapper = AccessDeniedMapper::new(anonymous());

    assert!(mapper.can_handle(&AppError::access_denied("no")));
}

#[test]
fn given_other_errors_then_cannot_handle() {
    let mapper = AccessDeniedMapper::new(anonymous());

    assert!(!mapper.can_handle(&AppError::http(StatusCode::FORBIDDEN, "Forbidden")));
    assert!(!mapper.can_handle(&AppError::internal("boom")));
    assert!(!mapper.can_handle(&AppError::from(DomainError::two_factor_required())));
}

#[test]
fn given_no_current_user_when_mapped_then_401_unauthorized() {
    // Given
    let mapper = AccessDeniedMapper::new(anonymous());
    let error = AppError::access_denied("Voter denied access to project p1");

    // When
    let mapping = mapper.map(&error);

    // Then
    assert_eq!(mapping.error_code, "UNAUTHORIZED");
    assert_eq!(mapping.message, "Authentication required");
    assert_eq!(mapping.status_code, StatusCode::UNAUTHORIZED);
    assert!(mapping.details.is_empty());
}

#[test]
fn given_current_user_when_mapped_then_403_forbidden() {
    // Given
    let mapper = AccessDeniedMapper::new(logged_in("user-1"));
    let error = AppError::access_denied("Voter denied access to project p1");

    // When
    let mapping = mapper.map(&error);

    // Then
    assert_eq!(mapping.error_code, "FORBIDDEN");
    assert_eq!(mapping.message, "Access denied");
    assert_eq!(mapping.status_code, StatusCode::FORBIDDEN);
    assert!(mapping.details.is_empty());
}

#[test]
fn given_detailed_message_when_mapped_then_message_not_leaked() {
    // Given
    let error = AppError::access_denied("internal voter TaskVoter::canEdit failed");

    // When
    let anonymous_mapping = AccessDeniedMapper::new(anonymous()).map(&error);
    let user_mapping = AccessDeniedMapper::new(logged_in("u")).map(&error);

    // Then
    assert!(!anonymous_mapping.message.contains("voter"));
    assert!(!user_mapping.message.contains("voter"));
}
