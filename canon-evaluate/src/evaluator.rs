//! GovernanceEvaluator — the three-outcome assessment state machine.
//!
//! Order is fixed: deterministic safety scan, then retrieval, then the
//! injected judgment step. The scan's escalation is terminal; retrieval
//! and judgment never see a triggered action. Every call writes exactly
//! one audit record, whichever branch it takes.

use canon_core::config::SafetyConfig;
use canon_core::errors::CanonResult;
use canon_core::models::{Assessment, AuditRecord, GovernanceResponse, QueryHit};
use canon_core::traits::{IJudgment, JudgmentInput};
use canon_retrieval::RetrievalEngine;
use tracing::{info, warn};

use crate::audit::AuditLog;
use crate::safety::SafetyScan;

/// The governance-assessment endpoint.
pub struct GovernanceEvaluator<'a> {
    /// `None` means the trigger set failed to compile; every call then
    /// escalates unconditionally.
    scan: Option<SafetyScan>,
    /// `None` or a failing engine degrades to judgment over an empty
    /// shortlist — it never suppresses the safety scan.
    retrieval: Option<&'a RetrievalEngine<'a>>,
    judgment: &'a dyn IJudgment,
    audit: &'a AuditLog,
    /// How many principles to retrieve for the judgment step.
    shortlist: usize,
}

impl<'a> GovernanceEvaluator<'a> {
    pub fn new(
        safety_config: &SafetyConfig,
        judgment: &'a dyn IJudgment,
        audit: &'a AuditLog,
    ) -> Self {
        Self {
            scan: SafetyScan::new(safety_config),
            retrieval: None,
            judgment,
            audit,
            shortlist: 5,
        }
    }

    pub fn with_retrieval(mut self, retrieval: &'a RetrievalEngine<'a>) -> Self {
        self.retrieval = Some(retrieval);
        self
    }

    pub fn with_shortlist(mut self, shortlist: usize) -> Self {
        self.shortlist = shortlist.max(1);
        self
    }

    /// Evaluate one action. Exactly one audit record is written per call.
    pub fn evaluate(&self, action: &str, context: Option<&str>) -> CanonResult<GovernanceResponse> {
        // Step 1: the deterministic scan. An unavailable scan escalates —
        // failure is toward escalation, never toward silent proceed.
        let Some(scan) = &self.scan else {
            warn!("safety scan unavailable, escalating unconditionally");
            return self.finish(
                action,
                false,
                Vec::new(),
                Assessment::Escalate,
                None,
                Some("safety scan unavailable".to_string()),
                true,
            );
        };

        if let Some(trigger) = scan.scan(action) {
            info!(trigger, "safety trigger fired, escalating");
            return self.finish(
                action,
                true,
                Vec::new(),
                Assessment::Escalate,
                None,
                Some(format!("safety trigger '{trigger}' matched")),
                false,
            );
        }

        // Step 2: retrieve the relevant-principle shortlist. Retrieval
        // trouble degrades the shortlist; it cannot change step 1's verdict.
        let (principles, low_confidence) = self.retrieve_principles(action);

        // Step 3: hand off to the injected judgment. A failed judgment
        // escalates rather than guessing.
        let input = JudgmentInput {
            action,
            context,
            principles: &principles,
        };
        let (assessment, modifications, escalation_reason) = match self.judgment.judge(&input) {
            Ok(decision) => (decision.assessment, decision.modifications, None),
            Err(e) => {
                warn!(error = %e, "judgment step failed, escalating");
                (
                    Assessment::Escalate,
                    None,
                    Some(format!("judgment unavailable: {e}")),
                )
            }
        };

        let principle_ids = principles.iter().map(|p| p.id.clone()).collect();
        self.finish(
            action,
            false,
            principle_ids,
            assessment,
            modifications,
            escalation_reason,
            low_confidence,
        )
    }

    fn retrieve_principles(&self, action: &str) -> (Vec<QueryHit>, bool) {
        let Some(retrieval) = self.retrieval else {
            return (Vec::new(), true);
        };
        match retrieval.query(action, None, Some(self.shortlist)) {
            Ok(response) => {
                let low = response.low_confidence;
                (response.hits, low)
            }
            Err(e) => {
                warn!(error = %e, "retrieval unavailable, judging with empty shortlist");
                (Vec::new(), true)
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn finish(
        &self,
        action: &str,
        s_series_triggered: bool,
        principle_ids: Vec<String>,
        assessment: Assessment,
        modifications: Option<String>,
        escalation_reason: Option<String>,
        low_confidence: bool,
    ) -> CanonResult<GovernanceResponse> {
        let record = AuditRecord::new(
            action.to_string(),
            s_series_triggered,
            principle_ids.clone(),
            assessment,
            modifications.clone(),
            escalation_reason.clone(),
        );
        self.audit.append(&record)?;

        Ok(GovernanceResponse {
            assessment,
            s_series_triggered,
            relevant_principles: principle_ids,
            modifications,
            escalation_reason,
            low_confidence,
            audit_id: record.audit_id,
        })
    }
}
