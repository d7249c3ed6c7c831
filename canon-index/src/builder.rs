//! Shadow index builds.
//!
//! The builder extracts records from every configured document, embeds
//! record bodies and domain descriptions with one pinned model, writes a
//! complete artifact set under a fresh generation id, and only then swaps
//! the `CURRENT` pointer. Any failure before the swap aborts the build and
//! discards the shadow directory; the previously active generation is
//! never touched.

use std::collections::HashMap;

use canon_core::config::{EmbeddingConfig, IndexConfig};
use canon_core::errors::{CanonResult, IndexError};
use canon_core::models::{DomainSet, DomainSummary, IndexManifest, Record, SkippedDomain};
use canon_embeddings::EmbeddingEngine;
use canon_extract::{materialize, FieldExtractor, SourceDocument};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::active::IndexHandle;
use crate::artifact::{self, LoadedIndex};

/// Summary of one completed build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    pub generation: String,
    pub record_count: usize,
    /// Identifier collisions where a later record overwrote an earlier one.
    pub collisions: usize,
    /// Malformed domain entries skipped from the build.
    pub skipped_domains: Vec<SkippedDomain>,
    /// Configured source documents that were not supplied.
    pub missing_documents: Vec<String>,
}

/// Builds one index generation from documents and domain configuration.
pub struct IndexBuilder<'a> {
    engine: &'a EmbeddingEngine,
    embedding_config: EmbeddingConfig,
    index_config: IndexConfig,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(
        engine: &'a EmbeddingEngine,
        embedding_config: EmbeddingConfig,
        index_config: IndexConfig,
    ) -> Self {
        Self {
            engine,
            embedding_config,
            index_config,
        }
    }

    /// Run a full build and activate the result.
    ///
    /// Serialized by the handle's build lock; a second concurrent rebuild
    /// is rejected with `BuildInProgress`.
    pub fn build(
        &self,
        handle: &IndexHandle,
        documents: &[SourceDocument],
        domains: &DomainSet,
    ) -> CanonResult<BuildReport> {
        let _guard = handle.begin_build()?;

        for skipped in &domains.skipped {
            warn!(domain = %skipped.key, reason = %skipped.reason, "domain skipped from build");
        }
        if domains.domains.is_empty() {
            return Err(IndexError::BuildAborted {
                reason: "no valid domains configured".to_string(),
            }
            .into());
        }

        // Stage 1: extract and materialize records, applying the collision
        // policy (later record wins, logged).
        let mut records: Vec<Record> = Vec::new();
        let mut by_id: HashMap<String, usize> = HashMap::new();
        let mut collisions = 0usize;
        let mut missing_documents: Vec<String> = Vec::new();

        for domain in &domains.domains {
            for source in &domain.sources {
                let Some(doc) = documents
                    .iter()
                    .find(|d| d.domain == domain.key && d.name == source.path)
                else {
                    warn!(domain = %domain.key, path = %source.path, "source document missing");
                    missing_documents.push(source.path.clone());
                    continue;
                };

                for draft in FieldExtractor::extract(doc, source.kind) {
                    let record = materialize(&draft, domain);
                    if let Some(&idx) = by_id.get(&record.id) {
                        warn!(id = %record.id, title = %record.title, "identifier collision, later record wins");
                        collisions += 1;
                        records[idx] = record;
                    } else {
                        by_id.insert(record.id.clone(), records.len());
                        records.push(record);
                    }
                }
            }
        }

        info!(
            records = records.len(),
            collisions,
            domains = domains.domains.len(),
            "extraction stage complete"
        );

        // Stage 2: embed record bodies and domain descriptions with the one
        // pinned model. Any embedding failure aborts the whole build.
        let record_texts: Vec<String> = records
            .iter()
            .map(|r| format!("{}\n{}", r.title, r.text))
            .collect();
        let record_vectors = self.engine.embed_all(&record_texts)?;

        let domain_texts: Vec<String> = domains
            .domains
            .iter()
            .map(|d| format!("{}\n{}", d.display_name, d.description))
            .collect();
        let domain_vectors = self.engine.embed_all(&domain_texts)?;

        if record_vectors.len() != records.len() || domain_vectors.len() != domains.domains.len() {
            return Err(IndexError::BuildAborted {
                reason: "vector row count does not match metadata row count".to_string(),
            }
            .into());
        }

        // Stage 3: write the shadow generation, then swap atomically.
        let generation = format!("gen-{}", uuid::Uuid::new_v4());
        let index = LoadedIndex {
            manifest: IndexManifest {
                generation: generation.clone(),
                created_at: Utc::now(),
                model_id: self.engine.model_id().to_string(),
                dimensions: self.embedding_config.dimensions,
                record_count: records.len(),
                domains: domains.domains.iter().map(DomainSummary::from).collect(),
                collisions,
            },
            records,
            record_vectors,
            domain_vectors,
        };

        let previous = artifact::read_pointer(handle.root())?;

        if let Err(e) = artifact::write_generation(handle.root(), &index) {
            // Discard the partial shadow; the active index is untouched.
            let _ = artifact::remove_generation(handle.root(), &generation);
            return Err(e);
        }

        if let Err(e) = handle.swap(&generation) {
            let _ = artifact::remove_generation(handle.root(), &generation);
            return Err(e);
        }

        self.collect_garbage(handle, &generation, previous.as_deref());

        info!(generation = %generation, records = index.manifest.record_count, "build complete");
        Ok(BuildReport {
            generation,
            record_count: index.manifest.record_count,
            collisions,
            skipped_domains: domains.skipped.clone(),
            missing_documents,
        })
    }

    /// Remove generations beyond the retention window. Best-effort; a
    /// failed delete is logged, never surfaced.
    fn collect_garbage(&self, handle: &IndexHandle, active: &str, previous: Option<&str>) {
        let keep_previous = self.index_config.keep_generations > 1;
        let Ok(generations) = artifact::list_generations(handle.root()) else {
            return;
        };
        for generation in generations {
            if generation == active {
                continue;
            }
            if keep_previous && Some(generation.as_str()) == previous {
                continue;
            }
            if let Err(e) = artifact::remove_generation(handle.root(), &generation) {
                warn!(generation = %generation, error = %e, "failed to remove old generation");
            }
        }
    }
}
