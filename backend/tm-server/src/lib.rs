pub mod api;
pub mod app_state;
pub mod current_user;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::{ApiError, Result as ApiResult},
    projects::{
        node::build_project_node,
        node_request::ProjectNodeRequest,
        node_response::ProjectNodeResponse,
        tree::build_project_tree,
        tree_request::ProjectTreeRequest,
        tree_response::ProjectTreeResponse,
    },
};
pub use app_state::AppState;
pub use current_user::{RequestUserProvider, USER_ID_HEADER, scope_current_user};

pub use crate::routes::build_router;
