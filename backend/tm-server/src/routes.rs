use crate::api::error::ApiError;
use crate::{AppState, build_project_node, build_project_tree, health, scope_current_user};

use tm_classifier::AppError;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri},
    middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Project hierarchy endpoints
        .route("/api/v1/projects/tree", post(build_project_tree))
        .route("/api/v1/projects/node", post(build_project_node))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Unknown paths and methods use the same error body as handlers
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(middleware::from_fn(scope_current_user))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> ApiError {
    state.reject(AppError::http(
        StatusCode::NOT_FOUND,
        format!("No route for {}", uri.path()),
    ))
}

async fn method_not_allowed(State(state): State<AppState>) -> ApiError {
    state.reject(AppError::http(StatusCode::METHOD_NOT_ALLOWED, ""))
}
