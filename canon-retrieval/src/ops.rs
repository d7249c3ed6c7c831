//! Smoke-test operation: run a sample query against the active index.

use canon_core::config::RetrievalConfig;
use canon_core::errors::CanonResult;
use canon_core::models::RetrievalResponse;
use canon_embeddings::EmbeddingEngine;
use canon_index::IndexHandle;

use crate::engine::RetrievalEngine;

/// Run one query against the active index for smoke-testing an
/// already-swapped-in generation.
pub fn test_query(
    handle: &IndexHandle,
    embeddings: &EmbeddingEngine,
    config: &RetrievalConfig,
    query_text: &str,
) -> CanonResult<RetrievalResponse> {
    RetrievalEngine::new(handle, embeddings, config.clone()).query(query_text, None, None)
}
