use crate::{AppError, CurrentUserProvider, ExceptionMapper, ExceptionMapping, FORBIDDEN, UNAUTHORIZED};

use std::sync::Arc;

use http::StatusCode;

/// Maps access-denied failures to 401 or 403 depending on whether anyone is
/// logged in. The original message is always replaced with a fixed string.
pub struct AccessDeniedMapper {
    users: Arc<dyn CurrentUserProvider>,
}

impl AccessDeniedMapper {
    pub const PRIORITY: i32 = 75;

    pub fn new(users: Arc<dyn CurrentUserProvider>) -> Self {
        Self { users }
    }
}

impl ExceptionMapper for AccessDeniedMapper {
    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn name(&self) -> &'static str {
        "access_denied"
    }

    fn can_handle(&self, error: &AppError) -> bool {
        matches!(error, AppError::AccessDenied { .. })
    }

    fn map(&self, _error: &AppError) -> ExceptionMapping {
        match self.users.current_user() {
            None => ExceptionMapping::new(
                UNAUTHORIZED,
                "Authentication required",
                StatusCode::UNAUTHORIZED,
            ),
            Some(_) => ExceptionMapping::new(FORBIDDEN, "Access denied", StatusCode::FORBIDDEN),
        }
    }
}
