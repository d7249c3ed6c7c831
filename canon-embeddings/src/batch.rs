//! Batch embedding with rayon data-parallelism.

use canon_core::errors::{CanonResult, EmbeddingError};
use canon_core::traits::IEmbeddingProvider;
use rayon::prelude::*;
use tracing::debug;

/// Embed all texts in parallel batches of `batch_size`.
///
/// Output order matches input order. Any failed batch fails the whole call
/// — partial vector sets never leak into a build.
pub fn embed_all(
    provider: &dyn IEmbeddingProvider,
    texts: &[String],
    batch_size: usize,
) -> CanonResult<Vec<Vec<f32>>> {
    if texts.is_empty() {
        return Ok(Vec::new());
    }
    let batch_size = batch_size.max(1);

    let batches: Vec<CanonResult<Vec<Vec<f32>>>> = texts
        .par_chunks(batch_size)
        .map(|chunk| provider.embed_batch(chunk))
        .collect();

    let mut out = Vec::with_capacity(texts.len());
    for batch in batches {
        out.extend(batch?);
    }

    if out.len() != texts.len() {
        return Err(EmbeddingError::BatchFailed {
            reason: format!("expected {} vectors, got {}", texts.len(), out.len()),
        }
        .into());
    }

    debug!(texts = texts.len(), batch_size, "batch embedding complete");
    Ok(out)
}
