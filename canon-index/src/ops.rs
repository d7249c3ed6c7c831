//! Operator entry points: rebuild from a document corpus, validate the
//! active index.
//!
//! A rebuild either activates a new generation or reports a build failure
//! with the prior index left intact. Validation inspects, never repairs.

use std::fs;
use std::path::Path;

use canon_core::config::CanonConfig;
use canon_core::errors::CanonResult;
use canon_core::models::DomainSet;
use canon_embeddings::EmbeddingEngine;
use canon_extract::SourceDocument;
use tracing::info;

use crate::active::IndexHandle;
use crate::builder::{BuildReport, IndexBuilder};
use crate::validator::{self, IntegrityReport};

/// File name of the domain configuration within a corpus root.
pub const DOMAINS_FILE: &str = "domains.toml";

/// Load the domain set and every configured source document from disk.
///
/// A missing document is not fatal here; the builder reports it and
/// under-extracts, matching the extractor's totality contract.
pub fn load_corpus(corpus_root: &Path) -> CanonResult<(DomainSet, Vec<SourceDocument>)> {
    let config_text = fs::read_to_string(corpus_root.join(DOMAINS_FILE))?;
    let domains = DomainSet::from_toml_str(&config_text)?;

    let mut documents = Vec::new();
    for domain in &domains.domains {
        for source in &domain.sources {
            let path = corpus_root.join(&source.path);
            let Ok(text) = fs::read_to_string(&path) else {
                continue;
            };
            let version = blake3::hash(text.as_bytes()).to_hex()[..16].to_string();
            documents.push(SourceDocument {
                domain: domain.key.clone(),
                name: source.path.clone(),
                version,
                text,
            });
        }
    }

    Ok((domains, documents))
}

/// Rebuild the index from the corpus and activate the result.
pub fn rebuild(
    handle: &IndexHandle,
    corpus_root: &Path,
    engine: &EmbeddingEngine,
    config: &CanonConfig,
) -> CanonResult<BuildReport> {
    let (domains, documents) = load_corpus(corpus_root)?;
    info!(
        domains = domains.domains.len(),
        documents = documents.len(),
        corpus = %corpus_root.display(),
        "rebuild starting"
    );
    let builder = IndexBuilder::new(engine, config.embedding.clone(), config.index.clone());
    builder.build(handle, &documents, &domains)
}

/// Inspect the active artifact set's integrity.
pub fn validate(handle: &IndexHandle) -> CanonResult<IntegrityReport> {
    validator::validate_active(handle.root())
}
