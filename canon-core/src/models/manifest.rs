use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::DomainConfig;

/// Per-domain summary pinned into the manifest at build time.
///
/// The domain-vector matrix is row-aligned to `IndexManifest::domains`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainSummary {
    pub key: String,
    pub display_name: String,
    pub priority: u32,
}

impl From<&DomainConfig> for DomainSummary {
    fn from(d: &DomainConfig) -> Self {
        Self {
            key: d.key.clone(),
            display_name: d.display_name.clone(),
            priority: d.priority,
        }
    }
}

/// Manifest describing one index generation.
///
/// All artifacts in a generation directory are co-versioned under the
/// `generation` id; the embedding model and dimensionality are pinned here
/// so a mixed-model index is detectable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexManifest {
    /// Generation id (UUID v4), also the generation directory name.
    pub generation: String,
    pub created_at: DateTime<Utc>,
    /// Embedding model that produced every vector in this generation.
    pub model_id: String,
    /// Dimensionality of every vector in this generation.
    pub dimensions: usize,
    /// Number of rows in the metadata table and content-vector matrix.
    pub record_count: usize,
    /// Domains in routing-vector row order.
    pub domains: Vec<DomainSummary>,
    /// Identifier collisions observed during the build (later record won).
    pub collisions: usize,
}
