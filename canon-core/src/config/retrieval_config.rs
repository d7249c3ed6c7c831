use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Default number of hits returned when the caller gives no top_k.
    pub top_k: usize,
    /// How many candidate domains the router shortlists.
    pub domain_shortlist: usize,
    /// Weight of normalized domain priority in the blended record score.
    pub priority_weight: f64,
    /// Similarity band within which two domains count as tied during
    /// routing, letting priority break the tie deterministically.
    pub routing_epsilon: f64,
    /// Confidence below this is flagged as advisory on the response.
    pub low_confidence_threshold: f64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            domain_shortlist: defaults::DEFAULT_DOMAIN_SHORTLIST,
            priority_weight: defaults::DEFAULT_PRIORITY_WEIGHT,
            routing_epsilon: defaults::DEFAULT_ROUTING_EPSILON,
            low_confidence_threshold: defaults::DEFAULT_LOW_CONFIDENCE_THRESHOLD,
        }
    }
}
