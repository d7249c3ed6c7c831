//! # canon-core
//!
//! Foundation crate for the Canon governance extraction-and-retrieval engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CanonConfig;
pub use errors::{CanonError, CanonResult};
pub use models::{
    Assessment, AuditRecord, Confidence, DomainConfig, IndicatorField, Record, RecordKind,
};
