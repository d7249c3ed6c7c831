use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::assessment::Assessment;

/// One immutable compliance-audit entry, written per evaluator call.
///
/// Audit records are append-only: never edited, only superseded by newer
/// entries for later calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// UUID v4, unique per evaluator call.
    pub audit_id: String,
    pub created_at: DateTime<Utc>,
    /// The action text as submitted.
    pub action: String,
    /// Whether the deterministic safety scan fired.
    pub s_series_triggered: bool,
    /// Principle ids retrieved for the judgment step (empty on the
    /// escalation fast-path).
    pub principle_ids: Vec<String>,
    pub assessment: Assessment,
    pub modifications: Option<String>,
    pub escalation_reason: Option<String>,
}

impl AuditRecord {
    /// Create a new record with a fresh audit id and timestamp.
    pub fn new(
        action: String,
        s_series_triggered: bool,
        principle_ids: Vec<String>,
        assessment: Assessment,
        modifications: Option<String>,
        escalation_reason: Option<String>,
    ) -> Self {
        Self {
            audit_id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            action,
            s_series_triggered,
            principle_ids,
            assessment,
            modifications,
            escalation_reason,
        }
    }
}
