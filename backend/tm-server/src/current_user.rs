//! Per-request current user.
//!
//! `scope_current_user` reads the `X-User-Id` header and runs the rest of
//! the request inside a task-local scope, so the process-wide classifier's
//! `RequestUserProvider` can see who is calling without global state.

use tm_classifier::{AuthenticatedUser, CurrentUserProvider};

use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};

pub const USER_ID_HEADER: &str = "X-User-Id";

tokio::task_local! {
    static CURRENT_USER: Option<AuthenticatedUser>;
}

/// Middleware: scope the caller's identity for the duration of the request.
pub async fn scope_current_user(request: Request, next: Next) -> Response {
    let user = user_from_headers(request.headers());
    CURRENT_USER.scope(user, next.run(request)).await
}

/// Extract the user from `X-User-Id`. Missing, blank or non-UTF-8 values
/// mean anonymous.
pub fn user_from_headers(headers: &HeaderMap) -> Option<AuthenticatedUser> {
    let header_value = headers.get(USER_ID_HEADER)?;

    match header_value.to_str() {
        Ok(user_id) if !user_id.trim().is_empty() => {
            log::debug!("Using user ID from {} header: {}", USER_ID_HEADER, user_id);
            Some(AuthenticatedUser::new(user_id.trim()))
        }
        Ok(_) => None,
        Err(_) => {
            log::warn!("Ignoring non-ASCII {} header", USER_ID_HEADER);
            None
        }
    }
}

/// Reads the user scoped by [`scope_current_user`]. Outside a request
/// scope it reports no user.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestUserProvider;

impl RequestUserProvider {
    /// Current request's user, if any
    pub fn current() -> Option<AuthenticatedUser> {
        CURRENT_USER.try_with(Clone::clone).ok().flatten()
    }
}

impl CurrentUserProvider for RequestUserProvider {
    fn current_user(&self) -> Option<AuthenticatedUser> {
        Self::current()
    }
}

#[cfg(test)]
pub(crate) async fn with_user<F: std::future::Future>(
    user: Option<AuthenticatedUser>,
    future: F,
) -> F::Output {
    CURRENT_USER.scope(user, future).await
}
