use crate::AppState;

use std::time::SystemTime;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with component status
pub async fn health(State(state): State<AppState>) -> Response {
    let auth = if state.auth_required {
        "required"
    } else {
        "optional"
    };

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "classifier": {
                "status": "operational",
                "mappers": state.classifier.mapper_names(),
            },
            "auth": auth,
            "hierarchy": { "maxDepth": state.max_tree_depth },
        },
        "timestamp": humantime::format_rfc3339(SystemTime::now()).to_string(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (ready to accept traffic?)
pub async fn readiness(State(state): State<AppState>) -> Response {
    // An empty chain would answer every error with INTERNAL_ERROR
    if state.classifier.is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response();
    }

    (StatusCode::OK, "Ready").into_response()
}
