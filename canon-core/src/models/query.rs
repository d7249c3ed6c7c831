use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::record::RecordKind;

/// One ranked retrieval hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryHit {
    pub id: String,
    pub domain: String,
    pub category: String,
    pub kind: RecordKind,
    pub title: String,
    pub text: String,
    /// Blended score: semantic similarity plus a small priority weight.
    pub score: f64,
}

/// Ordered retrieval results with an overall confidence signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResponse {
    pub hits: Vec<QueryHit>,
    /// Derived from the top-1/top-2 score margin.
    pub confidence: Confidence,
    /// True when confidence fell below the configured threshold; such
    /// results are advisory, not authoritative.
    pub low_confidence: bool,
    /// Domain keys the router shortlisted, in rank order.
    pub routed_domains: Vec<String>,
}
