mod mappers;

use crate::{AuthenticatedUser, CurrentUserProvider};

use std::sync::Arc;

/// Lookup with nobody logged in
pub(crate) fn anonymous() -> Arc<dyn CurrentUserProvider> {
    Arc::new(|| None::<AuthenticatedUser>)
}

/// Lookup with a fixed logged-in user
pub(crate) fn logged_in(id: &'static str) -> Arc<dyn CurrentUserProvider> {
    Arc::new(move || Some(AuthenticatedUser::new(id)))
}
