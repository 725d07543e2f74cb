pub mod error;
pub mod hierarchy;
pub mod models;

pub use error::{CoreError, Result};
pub use hierarchy::{
    DEFAULT_MAX_DEPTH, flatten_tree, transform_node, transform_to_tree,
    transform_to_tree_with_max_depth,
};
pub use models::project_record::ProjectRecord;
pub use models::task_count::{TaskCount, TaskCountAggregate};
pub use models::tree_node::TreeNode;

#[cfg(test)]
mod tests;
