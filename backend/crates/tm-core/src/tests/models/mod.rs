mod project_record;
mod task_count;
mod tree_node;
