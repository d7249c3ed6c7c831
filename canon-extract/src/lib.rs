//! # canon-extract
//!
//! Turns loosely-structured policy documents into structured records:
//! heading-aware field extraction, deterministic identifier generation, and
//! total category classification.
//!
//! Extraction never fails a whole document for a local defect — malformed
//! spans under-extract, sections without a recognized indicator field are
//! silently dropped, and unmapped headings degrade to the "general"
//! category.

pub mod classifier;
pub mod document;
pub mod extractor;
pub mod identifier;

pub use document::SourceDocument;
pub use extractor::{FieldExtractor, RecordDraft};

use canon_core::models::{DomainConfig, Record};

/// Materialize a draft into a full record: classify its category and derive
/// its stable identifier.
pub fn materialize(draft: &RecordDraft, config: &DomainConfig) -> Record {
    let category = classifier::classify(config, &draft.category_heading);
    let id = identifier::record_id(&config.key, draft.kind, &category, &draft.title);
    Record {
        id,
        domain: config.key.clone(),
        category,
        kind: draft.kind,
        title: draft.title.clone(),
        text: draft.body.clone(),
        fields: draft.fields.clone(),
    }
}
