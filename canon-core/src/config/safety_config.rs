use serde::{Deserialize, Serialize};

/// Safety-scan configuration.
///
/// The scan always includes the built-in trigger set; `extra_patterns`
/// extends it per deployment. Patterns cannot be removed through config —
/// the built-in set is non-bypassable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyConfig {
    /// Additional regex patterns treated as safety triggers.
    pub extra_patterns: Vec<String>,
}
