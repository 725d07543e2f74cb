use crate::{ConfigError, ConfigErrorResult, MAX_MAX_TREE_DEPTH};

use serde::Deserialize;
use tm_core::DEFAULT_MAX_DEPTH;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Deepest project level a tree request may contain (roots are 0)
    pub max_depth: u32,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl HierarchyConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Deeper trees overflow a worker stack when serialized or dropped
        if self.max_depth > MAX_MAX_TREE_DEPTH {
            return Err(ConfigError::hierarchy(format!(
                "hierarchy.max_depth must be 0-{}, got {}",
                MAX_MAX_TREE_DEPTH, self.max_depth
            )));
        }

        Ok(())
    }
}
