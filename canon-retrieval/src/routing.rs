//! Domain routing: rank domains by query-to-description similarity, with
//! configured priority as a deterministic tie-break for near-equal scores.

use canon_index::LoadedIndex;

use crate::similarity::cosine;

/// One routed domain candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedDomain {
    /// Row index into the manifest's domain list.
    pub index: usize,
    pub key: String,
    pub similarity: f64,
    pub priority: u32,
}

/// Rank all domains against the query vector and return the top
/// `shortlist` candidates.
///
/// Similarities within `epsilon` of each other count as tied; ties are
/// broken by priority (higher wins), then by domain key for full
/// determinism. Implemented by bucketing similarity at epsilon
/// granularity, which keeps the sort key transitive.
pub fn route(
    index: &LoadedIndex,
    query_vector: &[f32],
    shortlist: usize,
    epsilon: f64,
) -> Vec<RoutedDomain> {
    let epsilon = if epsilon > 0.0 { epsilon } else { f64::MIN_POSITIVE };

    let mut candidates: Vec<RoutedDomain> = index
        .manifest
        .domains
        .iter()
        .enumerate()
        .map(|(i, d)| RoutedDomain {
            index: i,
            key: d.key.clone(),
            similarity: index
                .domain_vectors
                .get(i)
                .map(|v| cosine(query_vector, v))
                .unwrap_or(0.0),
            priority: d.priority,
        })
        .collect();

    candidates.sort_by(|a, b| {
        let bucket_a = (a.similarity / epsilon).floor() as i64;
        let bucket_b = (b.similarity / epsilon).floor() as i64;
        bucket_b
            .cmp(&bucket_a)
            .then(b.priority.cmp(&a.priority))
            .then(a.key.cmp(&b.key))
    });

    candidates.truncate(shortlist.max(1));
    candidates
}
