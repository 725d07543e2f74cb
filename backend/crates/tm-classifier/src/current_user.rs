//! Current-user lookup injected into mappers that depend on authentication state.

/// Identity of the user making the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: String,
}

impl AuthenticatedUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

pub trait CurrentUserProvider: Send + Sync {
    /// `None` when the request is unauthenticated
    fn current_user(&self) -> Option<AuthenticatedUser>;
}

impl<F> CurrentUserProvider for F
where
    F: Fn() -> Option<AuthenticatedUser> + Send + Sync,
{
    fn current_user(&self) -> Option<AuthenticatedUser> {
        self()
    }
}
