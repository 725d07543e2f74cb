//! Tree node - one project placed in the assembled hierarchy.

use crate::{ProjectRecord, TaskCount};

use serde::{Deserialize, Serialize};

/// A project with its depth, task counters and ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub position: i32,
    pub is_archived: bool,
    pub show_children_tasks: bool,
    /// 0 for roots, parent depth + 1 otherwise
    pub depth: u32,
    pub task_count: u32,
    pub completed_task_count: u32,
    pub pending_task_count: u32,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Build a childless node from a record. The record is cloned, never consumed.
    pub(crate) fn from_record(record: &ProjectRecord, depth: u32, counts: TaskCount) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            color: record.color.clone(),
            icon: record.icon.clone(),
            position: record.position,
            is_archived: record.is_archived,
            show_children_tasks: record.show_children_tasks,
            depth,
            task_count: counts.total,
            completed_task_count: counts.completed,
            pending_task_count: counts.pending(),
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Pre-order walk over this subtree
    pub fn iter(&self) -> TreeIter<'_> {
        TreeIter { stack: vec![self] }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Pre-order iterator returned by [`TreeNode::iter`].
pub struct TreeIter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for TreeIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse so the first child is visited next
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
