use tm_core::TreeNode;

use serde::Serialize;

/// Project forest response
#[derive(Debug, Serialize)]
pub struct ProjectTreeResponse {
    pub projects: Vec<TreeNode>,
}
