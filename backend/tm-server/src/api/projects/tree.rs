//! Project tree REST API handler

use crate::api::error::rejection_to_app_error;
use crate::{ApiResult, AppState, ProjectTreeRequest, ProjectTreeResponse};

use tm_classifier::AppError;
use tm_core::transform_to_tree_with_max_depth;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

/// POST /api/v1/projects/tree
///
/// Assemble flat project rows and task counts into an ordered forest
pub async fn build_project_tree(
    State(state): State<AppState>,
    payload: Result<Json<ProjectTreeRequest>, JsonRejection>,
) -> ApiResult<Json<ProjectTreeResponse>> {
    state.require_user()?;

    let Json(request) = payload.map_err(|rejection| state.reject(rejection_to_app_error(rejection)))?;

    let violations = request.validate();
    if !violations.is_empty() {
        return Err(state.reject(AppError::validation(violations)));
    }

    let projects = transform_to_tree_with_max_depth(
        &request.projects,
        request.task_counts.as_ref(),
        state.max_tree_depth,
    )
    .map_err(|e| state.reject(AppError::from(e)))?;

    log::info!(
        "Built project tree: {} project(s), {} root(s)",
        request.projects.len(),
        projects.len()
    );

    Ok(Json(ProjectTreeResponse { projects }))
}
