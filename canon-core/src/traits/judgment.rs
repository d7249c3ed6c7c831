use crate::errors::CanonResult;
use crate::models::{Assessment, QueryHit};

/// Input handed to the external judgment step.
#[derive(Debug)]
pub struct JudgmentInput<'a> {
    /// The action text under evaluation.
    pub action: &'a str,
    /// Free-form caller context.
    pub context: Option<&'a str>,
    /// Retrieved principles relevant to the action.
    pub principles: &'a [QueryHit],
}

/// Decision returned by the judgment step.
#[derive(Debug, Clone)]
pub struct JudgmentDecision {
    /// `Proceed` or `ProceedWithModifications`. A judgment can never
    /// produce `Escalate`; escalation belongs to the deterministic scan.
    pub assessment: Assessment,
    /// Modification text when changes are required.
    pub modifications: Option<String>,
}

/// The reasoning-based assessment step, injected into the evaluator.
///
/// Deliberately outside this subsystem's determinism guarantees: the
/// evaluator's safety scan runs before and independently of any
/// implementation of this trait.
pub trait IJudgment: Send + Sync {
    fn judge(&self, input: &JudgmentInput<'_>) -> CanonResult<JudgmentDecision>;
}
