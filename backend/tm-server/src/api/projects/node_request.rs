use tm_classifier::FieldViolation;
use tm_core::{ProjectRecord, TaskCount, TreeNode};

use serde::Deserialize;

/// Body of POST /api/v1/projects/node
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectNodeRequest {
    pub project: ProjectRecord,
    /// Already-assembled children, attached in the given order
    #[serde(default)]
    pub children: Vec<TreeNode>,
    #[serde(default)]
    pub task_count: Option<TaskCount>,
}

impl ProjectNodeRequest {
    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if self.project.id.trim().is_empty() {
            violations.push(FieldViolation::new("project.id", "must not be blank"));
        }
        if self.project.name.trim().is_empty() {
            violations.push(FieldViolation::new("project.name", "must not be blank"));
        }
        if let Some(count) = self.task_count
            && count.completed > count.total
        {
            violations.push(FieldViolation::new(
                "taskCount.completed",
                format!("must not exceed total ({})", count.total),
            ));
        }

        violations
    }
}
