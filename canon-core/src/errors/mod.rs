//! Per-subsystem error enums aggregated into [`CanonError`].
//!
//! Extraction and classification never error (they are total by contract);
//! build, index, retrieval, and evaluation failures surface here.

mod embedding_error;
mod evaluate_error;
mod index_error;
mod retrieval_error;

pub use embedding_error::EmbeddingError;
pub use evaluate_error::EvaluateError;
pub use index_error::IndexError;
pub use retrieval_error::RetrievalError;

/// Top-level error type for the Canon engine.
#[derive(Debug, thiserror::Error)]
pub enum CanonError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Evaluate(#[from] EvaluateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result alias used across the workspace.
pub type CanonResult<T> = Result<T, CanonError>;
