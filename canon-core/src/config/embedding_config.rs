use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
///
/// One provider/dimension pair is pinned for the lifetime of an index
/// generation; changing either requires a full rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider identifier (also recorded in the index manifest).
    pub provider: String,
    /// Output vector dimensionality.
    pub dimensions: usize,
    /// Number of texts embedded per batch.
    pub batch_size: usize,
    /// Capacity of the in-memory embedding cache (entries).
    pub cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            cache_size: defaults::DEFAULT_EMBEDDING_CACHE_SIZE,
        }
    }
}
