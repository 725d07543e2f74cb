use tm_classifier::FieldViolation;
use tm_core::{ProjectRecord, TaskCountAggregate};

use serde::Deserialize;

/// Body of POST /api/v1/projects/tree
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTreeRequest {
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub task_counts: Option<TaskCountAggregate>,
}

impl ProjectTreeRequest {
    /// Field-level problems; empty when the request is usable.
    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        for (idx, project) in self.projects.iter().enumerate() {
            if project.id.trim().is_empty() {
                violations.push(FieldViolation::new(
                    format!("projects[{idx}].id"),
                    "must not be blank",
                ));
            }
            if project.name.trim().is_empty() {
                violations.push(FieldViolation::new(
                    format!("projects[{idx}].name"),
                    "must not be blank",
                ));
            }
        }

        if let Some(ref counts) = self.task_counts {
            let mut ids: Vec<&String> = counts.keys().collect();
            ids.sort();
            for id in ids {
                let count = counts[id];
                if count.completed > count.total {
                    violations.push(FieldViolation::new(
                        format!("taskCounts.{id}.completed"),
                        format!("must not exceed total ({})", count.total),
                    ));
                }
            }
        }

        violations
    }
}
