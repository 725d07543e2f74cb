use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Cyclic project hierarchy involving {} project(s): {} {location}", project_ids.len(), project_ids.join(", "))]
    CyclicHierarchy {
        /// Projects that could not be reached from any root
        project_ids: Vec<String>,
        location: ErrorLocation,
    },

    #[error("Project {project_id} is nested deeper than {max_depth} level(s) {location}")]
    DepthExceeded {
        /// First project found below the limit
        project_id: String,
        max_depth: u32,
        location: ErrorLocation,
    },

    #[error("Duplicate project id: {project_id} {location}")]
    DuplicateProjectId {
        project_id: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
