use crate::errors::CanonResult;

/// Embedding generation provider.
///
/// One provider/dimension pair is pinned per index generation; mixing
/// vectors from two models in one artifact set is never allowed.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> CanonResult<Vec<f32>>;

    /// Embed a batch of texts.
    fn embed_batch(&self, texts: &[String]) -> CanonResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Stable model identifier, recorded in the index manifest.
    fn model_id(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
