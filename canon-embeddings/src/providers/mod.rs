//! Embedding providers.

mod hashed_tf;

pub use hashed_tf::HashedTfProvider;

use canon_core::config::EmbeddingConfig;
use canon_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Create the provider named in the config.
///
/// Unknown provider names fall back to the deterministic local model with a
/// warning — the build must never be left without a provider.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    match config.provider.as_str() {
        HashedTfProvider::MODEL_ID => Box::new(HashedTfProvider::new(config.dimensions)),
        other => {
            warn!(provider = other, "unknown embedding provider, using hashed-tf");
            Box::new(HashedTfProvider::new(config.dimensions))
        }
    }
}
