use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Mappers {first} and {second} share priority {priority} {location}")]
    DuplicatePriority {
        priority: i32,
        first: &'static str,
        second: &'static str,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, ClassifierError>;
