use crate::{ApiError, ApiResult, RequestUserProvider};

use tm_classifier::{AppError, ExceptionClassifier};
use tm_config::Config;
use tm_core::DEFAULT_MAX_DEPTH;

use std::sync::Arc;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<ExceptionClassifier>,
    /// Tree routes reject anonymous callers when set
    pub auth_required: bool,
    /// Deepest project level a tree request may contain
    pub max_tree_depth: u32,
}

impl AppState {
    pub fn new(classifier: ExceptionClassifier, auth_required: bool) -> Self {
        Self {
            classifier: Arc::new(classifier),
            auth_required,
            max_tree_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_tree_depth(mut self, max_tree_depth: u32) -> Self {
        self.max_tree_depth = max_tree_depth;
        self
    }

    /// Default mapper chain wired to the request-scoped user lookup.
    pub fn from_config(config: &Config) -> crate::error::Result<Self> {
        let classifier = ExceptionClassifier::with_default_mappers(
            Arc::new(RequestUserProvider),
            config.errors.max_message_length,
        )?;

        Ok(Self::new(classifier, config.auth.required)
            .with_max_tree_depth(config.hierarchy.max_depth))
    }

    /// Classify a raised error into the response returned to the client.
    pub fn reject(&self, error: AppError) -> ApiError {
        ApiError::from(self.classifier.classify(&error))
    }

    /// Fail with access-denied when auth is required and nobody is logged in.
    #[track_caller]
    pub fn require_user(&self) -> ApiResult<()> {
        if self.auth_required && RequestUserProvider::current().is_none() {
            return Err(self.reject(AppError::access_denied(
                "Anonymous request to authenticated route",
            )));
        }
        Ok(())
    }
}
