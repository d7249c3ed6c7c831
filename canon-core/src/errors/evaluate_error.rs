/// Governance-evaluation errors.
#[derive(Debug, thiserror::Error)]
pub enum EvaluateError {
    #[error("audit store error: {message}")]
    AuditStore { message: String },

    #[error("judgment step failed: {message}")]
    JudgmentFailed { message: String },
}
