use crate::{AppError, ExceptionMapper, HttpExceptionMapper};

use http::StatusCode;

#[test]
fn given_http_exception_mapper_then_priority_is_10() {
    assert_eq!(HttpExceptionMapper::PRIORITY, 10);
    assert_eq!(HttpExceptionMapper::default().priority(), 10);
}

#[test]
fn given_http_error_then_can_handle() {
    let mapper = HttpExceptionMapper::default();

    assert!(mapper.can_handle(&AppError::http(StatusCode::NOT_FOUND, "")));
    assert!(!mapper.can_handle(&AppError::access_denied("no")));
    assert!(!mapper.can_handle(&AppError::internal("boom")));
}

#[test]
fn given_known_statuses_when_mapped_then_table_codes() {
    let mapper = HttpExceptionMapper::default();
    let table = [
        (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        (StatusCode::FORBIDDEN, "FORBIDDEN"),
        (StatusCode::NOT_FOUND, "NOT_FOUND"),
        (StatusCode::CONFLICT, "CONFLICT"),
        (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
        (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMIT_EXCEEDED"),
        (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE"),
    ];

    for (status, code) in table {
        let mapping = mapper.map(&AppError::http(status, "msg"));
        assert_eq!(mapping.error_code, code, "status {status}");
        assert_eq!(mapping.status_code, status);
    }
}

#[test]
fn given_unlisted_status_when_mapped_then_code_derived_from_status() {
    // Given
    let mapper = HttpExceptionMapper::default();

    // When
    let teapot = mapper.map(&AppError::http(StatusCode::IM_A_TEAPOT, ""));
    let not_allowed = mapper.map(&AppError::http(StatusCode::METHOD_NOT_ALLOWED, "nope"));

    // Then
    assert_eq!(teapot.error_code, "HTTP_418");
    assert_eq!(teapot.status_code, StatusCode::IM_A_TEAPOT);
    assert_eq!(not_allowed.error_code, "HTTP_405");
    assert_eq!(not_allowed.message, "nope");
}

#[test]
fn given_empty_message_when_mapped_then_canonical_reason() {
    // Given
    let mapper = HttpExceptionMapper::default();

    // When
    let mapping = mapper.map(&AppError::http(StatusCode::NOT_FOUND, ""));

    // Then
    assert_eq!(mapping.error_code, "NOT_FOUND");
    assert_eq!(mapping.status_code, StatusCode::NOT_FOUND);
    assert_eq!(mapping.message, "Not Found");
}

#[test]
fn given_whitespace_message_when_mapped_then_message_kept_verbatim() {
    // Given: non-empty, so it is the error's own message
    let error = AppError::http(StatusCode::TOO_MANY_REQUESTS, "  ");

    // When
    let mapping = HttpExceptionMapper::default().map(&error);

    // Then
    assert_eq!(mapping.message, "  ");
    assert_eq!(mapping.error_code, "RATE_LIMIT_EXCEEDED");
}

#[test]
fn given_padded_message_when_mapped_then_not_trimmed() {
    let mapping = HttpExceptionMapper::default()
        .map(&AppError::http(StatusCode::BAD_REQUEST, " Missing field `name` "));

    assert_eq!(mapping.message, " Missing field `name` ");
}

#[test]
fn given_message_when_mapped_then_message_kept() {
    let mapping = HttpExceptionMapper::default()
        .map(&AppError::http(StatusCode::BAD_REQUEST, "Missing field `name`"));

    assert_eq!(mapping.message, "Missing field `name`");
    assert!(mapping.details.is_empty());
}

#[test]
fn given_long_message_when_mapped_then_truncated() {
    // Given
    let mapper = HttpExceptionMapper::new(10);

    // When
    let mapping = mapper.map(&AppError::http(StatusCode::BAD_REQUEST, "x".repeat(50)));

    // Then
    assert_eq!(mapping.message.chars().count(), 10);
}
