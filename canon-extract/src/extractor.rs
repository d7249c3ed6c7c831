//! Field extraction: one document in, zero or more record drafts out.
//!
//! Records live at heading level 3; the nearest enclosing level-2 heading
//! becomes the category-source heading. A candidate survives only if its
//! body carries at least one recognized indicator field.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use canon_core::models::{IndicatorField, RecordKind};

use crate::document::{split_sections, SourceDocument};

/// Heading level at which principles/methods are written.
const RECORD_LEVEL: usize = 3;
/// Heading level that supplies the category-source heading.
const CATEGORY_LEVEL: usize = 2;

/// Structural section names filtered out before indicator scanning.
const STRUCTURAL_SECTIONS: [&str; 6] = [
    "scope",
    "glossary",
    "overview",
    "contents",
    "references",
    "changelog",
];

/// An extracted candidate record, prior to classification and id
/// assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDraft {
    pub domain: String,
    pub kind: RecordKind,
    /// The enclosing level-2 heading (empty when there is none).
    pub category_heading: String,
    pub title: String,
    pub body: String,
    /// Recognized indicator fields, in order of first appearance.
    pub fields: Vec<IndicatorField>,
}

fn field_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // A bold label at the start of a line, e.g. `**Definition**` or
    // `**Signals:**`.
    RE.get_or_init(|| Regex::new(r"^\*\*([A-Za-z][A-Za-z ]*?):?\*\*").expect("valid label regex"))
}

/// Scan a body for recognized indicator fields, in order of appearance.
pub fn scan_indicators(body: &str) -> Vec<IndicatorField> {
    let re = field_label_re();
    let mut found: Vec<IndicatorField> = Vec::new();
    for line in body.lines() {
        if let Some(caps) = re.captures(line.trim_start()) {
            if let Some(field) = IndicatorField::from_label(&caps[1]) {
                if !found.contains(&field) {
                    found.push(field);
                }
            }
        }
    }
    found
}

fn is_structural(heading: &str) -> bool {
    let lowered = heading.trim().to_lowercase();
    STRUCTURAL_SECTIONS.iter().any(|s| lowered == *s)
}

/// The field extractor. Stateless; extraction is a pure function of the
/// document text.
pub struct FieldExtractor;

impl FieldExtractor {
    /// Extract record drafts from one document.
    ///
    /// Total: malformed structure under-extracts (possibly to zero drafts)
    /// but never errors.
    pub fn extract(doc: &SourceDocument, kind: RecordKind) -> Vec<RecordDraft> {
        let sections = split_sections(&doc.text);
        let mut drafts: Vec<RecordDraft> = Vec::new();
        let mut category_heading = String::new();
        // Title and accumulated body of the record currently being built.
        let mut open: Option<(String, String)> = None;

        for section in &sections {
            if section.level > RECORD_LEVEL {
                // Subsections belong to the enclosing record; fold them in
                // so the embedded text stays complete.
                if let Some((_, body)) = open.as_mut() {
                    body.push_str("\n\n");
                    body.push_str(&section.heading);
                    if !section.body.is_empty() {
                        body.push('\n');
                        body.push_str(&section.body);
                    }
                }
                continue;
            }

            if let Some((title, body)) = open.take() {
                Self::close_record(doc, kind, &category_heading, title, body, &mut drafts);
            }

            if section.level <= CATEGORY_LEVEL {
                // Track the enclosing category heading; a level-1 heading
                // resets it.
                category_heading = if section.level == CATEGORY_LEVEL {
                    section.heading.clone()
                } else {
                    String::new()
                };
                continue;
            }

            if is_structural(&section.heading) {
                debug!(doc = %doc.name, heading = %section.heading, "skipping structural section");
                continue;
            }

            open = Some((section.heading.clone(), section.body.clone()));
        }

        if let Some((title, body)) = open.take() {
            Self::close_record(doc, kind, &category_heading, title, body, &mut drafts);
        }

        debug!(
            doc = %doc.name,
            sections = sections.len(),
            drafts = drafts.len(),
            "extraction complete"
        );
        drafts
    }

    fn close_record(
        doc: &SourceDocument,
        kind: RecordKind,
        category_heading: &str,
        title: String,
        body: String,
        drafts: &mut Vec<RecordDraft>,
    ) {
        let body = body.trim().to_string();
        if title.is_empty() || body.is_empty() {
            return;
        }

        let fields = scan_indicators(&body);
        if fields.is_empty() {
            // Expected for connective prose; dropped, not an error.
            debug!(doc = %doc.name, heading = %title, "no indicator field, dropping");
            return;
        }

        drafts.push(RecordDraft {
            domain: doc.domain.clone(),
            kind,
            category_heading: category_heading.to_string(),
            title,
            body,
            fields,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> SourceDocument {
        SourceDocument {
            domain: "coding".to_string(),
            name: "principles.md".to_string(),
            version: "1.0".to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn extracts_record_with_indicator_field() {
        let d = doc(
            "## Context Principles\n\n### Specification Completeness\n\
             **Definition**\nA spec must state every requirement.\n",
        );
        let drafts = FieldExtractor::extract(&d, RecordKind::Principle);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "Specification Completeness");
        assert_eq!(drafts[0].category_heading, "Context Principles");
        assert_eq!(drafts[0].fields, vec![IndicatorField::Definition]);
    }

    #[test]
    fn drops_sections_without_indicator_fields() {
        let d = doc("## Part\n### Just Prose\nNothing structured here.\n");
        assert!(FieldExtractor::extract(&d, RecordKind::Principle).is_empty());
    }

    #[test]
    fn filters_structural_sections_by_name() {
        let d = doc("## Part\n### Scope\n**Definition**\nLooks like a record but is structural.\n");
        assert!(FieldExtractor::extract(&d, RecordKind::Principle).is_empty());
    }

    #[test]
    fn empty_body_yields_no_draft() {
        let d = doc("## Part\n### Hollow\n### Next\n**Definition**\nReal body.\n");
        let drafts = FieldExtractor::extract(&d, RecordKind::Principle);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "Next");
    }

    #[test]
    fn level_one_heading_resets_category() {
        let d = doc(
            "## Cat A\n# New Part\n### Orphan\n**Definition**\nBody.\n",
        );
        let drafts = FieldExtractor::extract(&d, RecordKind::Principle);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].category_heading, "");
    }

    #[test]
    fn subsection_folds_into_enclosing_record() {
        let d = doc(
            "## Cat\n### Parent\n**Definition**\nbase text\n#### Worked Example\nsub body\n\
             ### Sibling\n**Steps**\n1. z\n",
        );
        let drafts = FieldExtractor::extract(&d, RecordKind::Principle);
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].title, "Parent");
        assert!(drafts[0].body.contains("Worked Example"));
        assert!(drafts[0].body.contains("sub body"));
        assert_eq!(drafts[1].title, "Sibling");
        assert!(!drafts[1].body.contains("sub body"));
    }

    #[test]
    fn indicator_inside_subsection_keeps_the_record() {
        let d = doc("## Cat\n### Layered\nintro prose\n#### Checks\n**Checklist**\n- one\n");
        let drafts = FieldExtractor::extract(&d, RecordKind::Principle);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].fields, vec![IndicatorField::Checklist]);
        assert!(drafts[0].body.contains("Checks"));
    }

    #[test]
    fn subsection_without_an_open_record_is_dropped() {
        let d = doc("## Cat\n#### Stray\n**Definition**\norphaned\n### Real\n**Definition**\nbody\n");
        let drafts = FieldExtractor::extract(&d, RecordKind::Principle);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "Real");
        assert!(!drafts[0].body.contains("orphaned"));
    }

    #[test]
    fn scan_finds_fields_in_appearance_order() {
        let body = "**Example**\nfirst\n**Definition:**\nsecond\n**Example**\nrepeat";
        assert_eq!(
            scan_indicators(body),
            vec![IndicatorField::Example, IndicatorField::Definition]
        );
    }

    #[test]
    fn unrecognized_labels_are_ignored() {
        assert!(scan_indicators("**Caveats**\nnot an indicator").is_empty());
    }

    #[test]
    fn extraction_is_deterministic() {
        let d = doc(
            "## Cat\n### A\n**Definition**\nx\n### B\n**Steps**\n1. y\n",
        );
        let a = FieldExtractor::extract(&d, RecordKind::Method);
        let b = FieldExtractor::extract(&d, RecordKind::Method);
        assert_eq!(a, b);
    }
}
