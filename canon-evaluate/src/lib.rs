//! # canon-evaluate
//!
//! The governance-assessment endpoint: a deterministic, non-bypassable
//! safety scan in front of retrieval-backed judgment, with exactly one
//! immutable audit record per call.
//!
//! The safety scan runs first, touches no index and no model, and its
//! escalation verdict cannot be overridden by anything downstream. If the
//! scan itself cannot run, the evaluator escalates — it never fails toward
//! a silent proceed.

pub mod audit;
pub mod evaluator;
pub mod safety;

pub use audit::AuditLog;
pub use evaluator::GovernanceEvaluator;
pub use safety::SafetyScan;
