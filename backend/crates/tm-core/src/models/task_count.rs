use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-project task totals, keyed by project id.
/// Projects without an entry are treated as having no tasks.
pub type TaskCountAggregate = HashMap<String, TaskCount>;

/// Task totals for one project. Expected to satisfy `completed <= total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCount {
    pub total: u32,
    pub completed: u32,
}

impl TaskCount {
    pub fn new(total: u32, completed: u32) -> Self {
        Self { total, completed }
    }

    /// Tasks not yet completed. Never negative, even for a malformed aggregate.
    pub fn pending(&self) -> u32 {
        self.total.saturating_sub(self.completed)
    }
}
