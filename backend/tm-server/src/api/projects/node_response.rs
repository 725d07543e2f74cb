use tm_core::TreeNode;

use serde::Serialize;

/// Single project node response
#[derive(Debug, Serialize)]
pub struct ProjectNodeResponse {
    pub project: TreeNode,
}
