use crate::api::error::rejection_to_app_error;
use crate::{ApiResult, AppState, ProjectNodeRequest, ProjectNodeResponse};

use tm_classifier::AppError;
use tm_core::transform_node;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

/// POST /api/v1/projects/node
///
/// Build one node from a project and pre-built children (detail views)
pub async fn build_project_node(
    State(state): State<AppState>,
    payload: Result<Json<ProjectNodeRequest>, JsonRejection>,
) -> ApiResult<Json<ProjectNodeResponse>> {
    state.require_user()?;

    let Json(request) = payload.map_err(|rejection| state.reject(rejection_to_app_error(rejection)))?;

    let violations = request.validate();
    if !violations.is_empty() {
        return Err(state.reject(AppError::validation(violations)));
    }

    let project = transform_node(&request.project, request.children, request.task_count);

    Ok(Json(ProjectNodeResponse { project }))
}
