use serde::{Deserialize, Serialize};

/// Terminal outcome of a governance evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assessment {
    Proceed,
    ProceedWithModifications,
    Escalate,
}

/// Response from the governance-assessment interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GovernanceResponse {
    pub assessment: Assessment,
    /// True when the deterministic safety scan fired.
    pub s_series_triggered: bool,
    /// Ids of the principles retrieved for the judgment step.
    pub relevant_principles: Vec<String>,
    /// Modification text when the judgment asked for changes.
    pub modifications: Option<String>,
    /// Why the action escalated, when it did.
    pub escalation_reason: Option<String>,
    /// True when the principle shortlist carried low retrieval confidence
    /// (or retrieval was unavailable entirely).
    pub low_confidence: bool,
    /// Id of the audit record written for this call.
    pub audit_id: String,
}
