/// Embedding-generation errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding has {actual} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("embedding provider '{name}' is unavailable")]
    ProviderUnavailable { name: String },

    #[error("batch embedding failed: {reason}")]
    BatchFailed { reason: String },
}
