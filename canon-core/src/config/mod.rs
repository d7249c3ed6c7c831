//! Engine configuration, grouped per subsystem with serde defaults so a
//! partial TOML/JSON config deserializes cleanly.

mod defaults;
mod embedding_config;
mod index_config;
mod retrieval_config;
mod safety_config;

pub use embedding_config::EmbeddingConfig;
pub use index_config::IndexConfig;
pub use retrieval_config::RetrievalConfig;
pub use safety_config::SafetyConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Canon engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CanonConfig {
    pub embedding: EmbeddingConfig,
    pub index: IndexConfig,
    pub retrieval: RetrievalConfig,
    pub safety: SafetyConfig,
}
