use crate::DEFAULT_AUTH_REQUIRED;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Reject tree requests without an `X-User-Id` header
    pub required: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            required: DEFAULT_AUTH_REQUIRED,
        }
    }
}
