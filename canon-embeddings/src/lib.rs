//! # canon-embeddings
//!
//! Embedding generation for record bodies and domain descriptions: a
//! provider seam (`IEmbeddingProvider`), a deterministic local provider,
//! rayon batch processing, and a write-through in-memory cache.
//!
//! One provider/dimension pair is pinned per index generation; the engine
//! validates every vector's dimensionality so two models can never mix
//! silently inside one artifact set.

pub mod batch;
pub mod engine;
pub mod providers;

pub use engine::EmbeddingEngine;
pub use providers::HashedTfProvider;
