use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Index artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Explicit artifact directory. When `None`, the `CANON_INDEX_DIR`
    /// environment variable is consulted, then the built-in default.
    pub index_dir: Option<PathBuf>,
    /// How many past generations to keep after a successful swap.
    pub keep_generations: usize,
}

impl IndexConfig {
    /// Resolve the artifact directory: explicit config > env override > default.
    pub fn resolve_dir(&self) -> PathBuf {
        if let Some(dir) = &self.index_dir {
            return dir.clone();
        }
        if let Ok(dir) = std::env::var(constants::INDEX_DIR_ENV) {
            if !dir.is_empty() {
                return PathBuf::from(dir);
            }
        }
        PathBuf::from(constants::DEFAULT_INDEX_DIR)
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            index_dir: None,
            keep_generations: defaults::DEFAULT_KEEP_GENERATIONS,
        }
    }
}
