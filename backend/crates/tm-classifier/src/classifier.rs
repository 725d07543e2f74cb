//! Priority-ordered exception classification.
//!
//! The classifier is assembled once at startup and is read-only afterwards,
//! so it can be shared across request tasks behind an `Arc` without locking.

use crate::{
    AccessDeniedMapper, AppError, ClassifierError, CurrentUserProvider, DomainExceptionMapper,
    ExceptionMapper, ExceptionMapping, HttpExceptionMapper, Result as ClassifierResult,
    ValidationExceptionMapper,
};

use std::cmp::Reverse;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, error, warn};

pub struct ExceptionClassifier {
    /// Sorted by descending priority
    mappers: Vec<Box<dyn ExceptionMapper>>,
}

impl ExceptionClassifier {
    /// Register mappers. Two mappers with the same priority would have no
    /// defined winner, so that is rejected here rather than at dispatch.
    #[track_caller]
    pub fn new(mut mappers: Vec<Box<dyn ExceptionMapper>>) -> ClassifierResult<Self> {
        mappers.sort_by_key(|mapper| Reverse(mapper.priority()));

        if let Some(pair) = mappers
            .windows(2)
            .find(|pair| pair[0].priority() == pair[1].priority())
        {
            return Err(ClassifierError::DuplicatePriority {
                priority: pair[0].priority(),
                first: pair[0].name(),
                second: pair[1].name(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        for mapper in &mappers {
            debug!(
                "Registered exception mapper {} (priority {})",
                mapper.name(),
                mapper.priority()
            );
        }

        Ok(Self { mappers })
    }

    /// Domain (100), access-denied (75), validation (50) and HTTP (10) mappers.
    #[track_caller]
    pub fn with_default_mappers(
        users: Arc<dyn CurrentUserProvider>,
        max_message_length: usize,
    ) -> ClassifierResult<Self> {
        let mappers: Vec<Box<dyn ExceptionMapper>> = vec![
            Box::new(DomainExceptionMapper),
            Box::new(AccessDeniedMapper::new(users)),
            Box::new(ValidationExceptionMapper),
            Box::new(HttpExceptionMapper::new(max_message_length)),
        ];
        Self::new(mappers)
    }

    /// Map `error` with the highest-priority mapper that claims it, or the
    /// generic 500 mapping if none does.
    pub fn classify(&self, error: &AppError) -> ExceptionMapping {
        let Some(mapper) = self.mappers.iter().find(|mapper| mapper.can_handle(error)) else {
            warn!("No exception mapper claimed error, using fallback: {error}");
            return ExceptionMapping::internal_error();
        };

        let mapping = mapper.map(error);

        if mapping.is_server_error() {
            error!(
                "{} mapped error to {} {}: {error}",
                mapper.name(),
                mapping.status_code.as_u16(),
                mapping.error_code
            );
        } else {
            debug!(
                "{} mapped error to {} {}",
                mapper.name(),
                mapping.status_code.as_u16(),
                mapping.error_code
            );
        }

        mapping
    }

    /// Registered mapper names, highest priority first
    pub fn mapper_names(&self) -> Vec<&'static str> {
        self.mappers.iter().map(|mapper| mapper.name()).collect()
    }

    /// Registered priorities, highest first
    pub fn priorities(&self) -> Vec<i32> {
        self.mappers.iter().map(|mapper| mapper.priority()).collect()
    }

    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }
}

impl fmt::Debug for ExceptionClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.mappers
                    .iter()
                    .map(|mapper| (mapper.name(), mapper.priority())),
            )
            .finish()
    }
}
