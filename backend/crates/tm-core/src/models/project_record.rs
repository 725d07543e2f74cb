//! Project record - flat row as delivered by the persistence layer.

use serde::{Deserialize, Serialize};

/// A single project row. Parent/child structure is expressed only through
/// `parent_id`; the hierarchy builder turns a slice of these into a forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    /// Sibling ordering key (ascending)
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub show_children_tasks: bool,
    /// `None` means root
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl ProjectRecord {
    /// Create a root project at position 0 with no optional fields set
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            color: None,
            icon: None,
            position: 0,
            is_archived: false,
            show_children_tasks: false,
            parent_id: None,
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
