//! RetrievalEngine: embed query → route domains → rank records → derive
//! confidence from the top-result margin.

use canon_core::config::RetrievalConfig;
use canon_core::errors::{CanonResult, RetrievalError};
use canon_core::models::{Confidence, QueryHit, RetrievalResponse};
use canon_embeddings::EmbeddingEngine;
use canon_index::{IndexHandle, LoadedIndex};
use tracing::{debug, info};

use crate::routing;
use crate::similarity::cosine;

/// The retrieval engine. Read-only against the active index; never blocks
/// on or triggers a rebuild.
pub struct RetrievalEngine<'a> {
    handle: &'a IndexHandle,
    embeddings: &'a EmbeddingEngine,
    config: RetrievalConfig,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(
        handle: &'a IndexHandle,
        embeddings: &'a EmbeddingEngine,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            handle,
            embeddings,
            config,
        }
    }

    /// Run a query against the active index.
    ///
    /// `domain_hint` restricts the search to one domain; without it the
    /// router shortlists candidate domains by description similarity.
    pub fn query(
        &self,
        query_text: &str,
        domain_hint: Option<&str>,
        top_k: Option<usize>,
    ) -> CanonResult<RetrievalResponse> {
        let index = self.handle.current()?;
        self.query_index(&index, query_text, domain_hint, top_k)
    }

    /// Query an explicitly provided generation (used by the evaluator and
    /// smoke tests that already hold one).
    pub fn query_index(
        &self,
        index: &LoadedIndex,
        query_text: &str,
        domain_hint: Option<&str>,
        top_k: Option<usize>,
    ) -> CanonResult<RetrievalResponse> {
        if index.records.is_empty() {
            return Err(RetrievalError::EmptyIndex.into());
        }
        if self.embeddings.model_id() != index.manifest.model_id {
            return Err(RetrievalError::ModelMismatch {
                query_model: self.embeddings.model_id().to_string(),
                index_model: index.manifest.model_id.clone(),
            }
            .into());
        }

        let top_k = top_k.unwrap_or(self.config.top_k).max(1);
        let query_vector = self.embeddings.embed_cached(query_text)?;

        // Stage 1: domain shortlist.
        let routed = match domain_hint {
            Some(hint) => {
                let position = index
                    .manifest
                    .domains
                    .iter()
                    .position(|d| d.key == hint)
                    .ok_or_else(|| RetrievalError::UnknownDomain {
                        domain: hint.to_string(),
                    })?;
                vec![routing::RoutedDomain {
                    index: position,
                    key: hint.to_string(),
                    similarity: 1.0,
                    priority: index.manifest.domains[position].priority,
                }]
            }
            None => routing::route(
                index,
                &query_vector,
                self.config.domain_shortlist,
                self.config.routing_epsilon,
            ),
        };
        let routed_keys: Vec<String> = routed.iter().map(|d| d.key.clone()).collect();
        debug!(domains = ?routed_keys, "domain shortlist");

        // Stage 2: rank records within the shortlisted domains, blending
        // semantic similarity with a small priority weight so core-tier
        // domains win ties.
        let max_priority = index
            .manifest
            .domains
            .iter()
            .map(|d| d.priority)
            .max()
            .unwrap_or(1)
            .max(1) as f64;

        let mut hits: Vec<QueryHit> = Vec::new();
        for (row, record) in index.records.iter().enumerate() {
            let Some(domain) = routed.iter().find(|d| d.key == record.domain) else {
                continue;
            };
            let semantic = cosine(&query_vector, &index.record_vectors[row]);
            let score =
                semantic + self.config.priority_weight * (domain.priority as f64 / max_priority);
            hits.push(QueryHit {
                id: record.id.clone(),
                domain: record.domain.clone(),
                category: record.category.clone(),
                kind: record.kind,
                title: record.title.clone(),
                text: record.text.clone(),
                score,
            });
        }

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        hits.truncate(top_k);

        let confidence = derive_confidence(&hits);
        let low_confidence = confidence.value() < self.config.low_confidence_threshold;

        info!(
            hits = hits.len(),
            confidence = %confidence,
            low_confidence,
            "retrieval complete"
        );

        Ok(RetrievalResponse {
            hits,
            confidence,
            low_confidence,
            routed_domains: routed_keys,
        })
    }
}

/// Confidence from the top-1/top-2 score margin: a wide margin means the
/// top result stands clearly apart; a narrow one means the ranking is
/// ambiguous and the caller should treat it as advisory rather than
/// authoritative. A lone hit has nothing to be confused with and scores by
/// its own similarity.
fn derive_confidence(hits: &[QueryHit]) -> Confidence {
    match hits {
        [] => Confidence::new(0.0),
        [only] => Confidence::new(only.score),
        [first, second, ..] => {
            let margin = (first.score - second.score).max(0.0);
            Confidence::new(0.2 + 4.0 * margin)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str, score: f64) -> QueryHit {
        QueryHit {
            id: id.to_string(),
            domain: "coding".to_string(),
            category: "general".to_string(),
            kind: canon_core::models::RecordKind::Principle,
            title: id.to_string(),
            text: String::new(),
            score,
        }
    }

    #[test]
    fn no_hits_means_zero_confidence() {
        assert_eq!(derive_confidence(&[]).value(), 0.0);
    }

    #[test]
    fn lone_hit_uses_its_own_score() {
        assert!((derive_confidence(&[hit("a", 0.7)]).value() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn wide_margin_beats_narrow_margin() {
        let wide = derive_confidence(&[hit("a", 0.9), hit("b", 0.4)]);
        let narrow = derive_confidence(&[hit("a", 0.9), hit("b", 0.89)]);
        assert!(wide.value() > narrow.value());
    }

    #[test]
    fn near_tied_top_results_are_low_confidence() {
        let c = derive_confidence(&[hit("a", 0.52), hit("b", 0.51)]);
        assert!(c.is_low());
    }
}
