//! EmbeddingEngine — provider plus cache plus dimension validation.

use canon_core::config::EmbeddingConfig;
use canon_core::errors::{CanonResult, EmbeddingError};
use canon_core::traits::IEmbeddingProvider;
use moka::sync::Cache;
use tracing::{debug, info};

use crate::batch;
use crate::providers;

/// The main embedding engine.
///
/// Wraps the configured provider with a write-through in-memory cache keyed
/// by blake3 content hash, and validates every vector's dimensionality
/// against the pinned config. Implements `IEmbeddingProvider` so it can be
/// used anywhere a provider is expected.
pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: Cache<String, Vec<f32>>,
    config: EmbeddingConfig,
}

impl EmbeddingEngine {
    /// Create a new engine from configuration.
    pub fn new(config: EmbeddingConfig) -> Self {
        let provider = providers::create_provider(&config);
        let cache = Cache::new(config.cache_size);

        info!(
            model = provider.model_id(),
            dims = config.dimensions,
            "embedding engine initialized"
        );

        Self {
            provider,
            cache,
            config,
        }
    }

    /// Wrap an explicit provider (used by builds that must pin a model and
    /// by tests injecting failing providers).
    pub fn with_provider(provider: Box<dyn IEmbeddingProvider>, config: EmbeddingConfig) -> Self {
        let cache = Cache::new(config.cache_size);
        Self {
            provider,
            cache,
            config,
        }
    }

    fn validate(&self, vector: &[f32]) -> CanonResult<()> {
        if vector.len() != self.config.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.config.dimensions,
                actual: vector.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Embed one text with caching.
    pub fn embed_cached(&self, text: &str) -> CanonResult<Vec<f32>> {
        let key = blake3::hash(text.as_bytes()).to_hex().to_string();
        if let Some(hit) = self.cache.get(&key) {
            debug!(hash = %key, "embedding cache hit");
            return Ok(hit);
        }

        let vector = self.provider.embed(text)?;
        self.validate(&vector)?;
        self.cache.insert(key, vector.clone());
        Ok(vector)
    }

    /// Embed a batch (rayon-parallel), validating every row.
    pub fn embed_all(&self, texts: &[String]) -> CanonResult<Vec<Vec<f32>>> {
        let vectors = batch::embed_all(self.provider.as_ref(), texts, self.config.batch_size)?;
        for v in &vectors {
            self.validate(v)?;
        }
        Ok(vectors)
    }

    pub fn model_id(&self) -> &str {
        self.provider.model_id()
    }

    pub fn dimensions(&self) -> usize {
        self.config.dimensions
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> CanonResult<Vec<f32>> {
        self.embed_cached(text)
    }

    fn embed_batch(&self, texts: &[String]) -> CanonResult<Vec<Vec<f32>>> {
        self.embed_all(texts)
    }

    fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    fn model_id(&self) -> &str {
        self.provider.model_id()
    }

    fn is_available(&self) -> bool {
        self.provider.is_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> EmbeddingEngine {
        EmbeddingEngine::new(EmbeddingConfig {
            dimensions: 128,
            ..Default::default()
        })
    }

    #[test]
    fn embeds_with_configured_dimensions() {
        let e = engine();
        assert_eq!(e.embed_cached("some governance text").unwrap().len(), 128);
    }

    #[test]
    fn cache_returns_identical_vector() {
        let e = engine();
        let a = e.embed_cached("cache me").unwrap();
        let b = e.embed_cached("cache me").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_provider_with_wrong_dimensions() {
        struct Lying;
        impl IEmbeddingProvider for Lying {
            fn embed(&self, _: &str) -> CanonResult<Vec<f32>> {
                Ok(vec![0.0; 7])
            }
            fn embed_batch(&self, texts: &[String]) -> CanonResult<Vec<Vec<f32>>> {
                texts.iter().map(|t| self.embed(t)).collect()
            }
            fn dimensions(&self) -> usize {
                7
            }
            fn model_id(&self) -> &str {
                "lying"
            }
            fn is_available(&self) -> bool {
                true
            }
        }

        let e = EmbeddingEngine::with_provider(
            Box::new(Lying),
            EmbeddingConfig {
                dimensions: 128,
                ..Default::default()
            },
        );
        assert!(e.embed_cached("anything").is_err());
    }

    #[test]
    fn batch_validates_all_rows() {
        let e = engine();
        let texts = vec!["one".to_string(), "two".to_string()];
        let vectors = e.embed_all(&texts).unwrap();
        assert!(vectors.iter().all(|v| v.len() == 128));
    }
}
