//! Data model for the governance engine: records, domains, index
//! manifests, query results, assessments, and audit records.

mod assessment;
mod audit;
mod confidence;
mod domain;
mod manifest;
mod query;
mod record;

pub use assessment::{Assessment, GovernanceResponse};
pub use audit::AuditRecord;
pub use confidence::Confidence;
pub use domain::{DomainConfig, DomainSet, SkippedDomain, SourceRef};
pub use manifest::{DomainSummary, IndexManifest};
pub use query::{QueryHit, RetrievalResponse};
pub use record::{IndicatorField, Record, RecordKind};
