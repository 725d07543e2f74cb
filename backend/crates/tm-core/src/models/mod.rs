pub mod project_record;
pub mod task_count;
pub mod tree_node;
