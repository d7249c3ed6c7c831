use serde::{Deserialize, Serialize};

/// Whether a record captures a principle or a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Principle,
    Method,
}

impl RecordKind {
    /// The segment this kind contributes to an identifier. Principles use
    /// their category code instead; methods always use the literal "method".
    pub fn id_segment(self) -> Option<&'static str> {
        match self {
            RecordKind::Principle => None,
            RecordKind::Method => Some("method"),
        }
    }
}

/// A recognized indicator field inside a record body.
///
/// A section only becomes a record if at least one of these is present;
/// the check is against this enum, not ad-hoc string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorField {
    Definition,
    Rationale,
    Application,
    Signals,
    Example,
    Steps,
    Checklist,
    Failure,
}

impl IndicatorField {
    pub const ALL: [IndicatorField; 8] = [
        IndicatorField::Definition,
        IndicatorField::Rationale,
        IndicatorField::Application,
        IndicatorField::Signals,
        IndicatorField::Example,
        IndicatorField::Steps,
        IndicatorField::Checklist,
        IndicatorField::Failure,
    ];

    /// The bold label marking this field in document prose.
    pub fn label(self) -> &'static str {
        match self {
            IndicatorField::Definition => "Definition",
            IndicatorField::Rationale => "Rationale",
            IndicatorField::Application => "Application",
            IndicatorField::Signals => "Signals",
            IndicatorField::Example => "Example",
            IndicatorField::Steps => "Steps",
            IndicatorField::Checklist => "Checklist",
            IndicatorField::Failure => "Failure",
        }
    }

    /// Parse a field label (case-insensitive, trimmed).
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(label))
    }
}

/// A structured principle or method extracted from a policy document.
///
/// Also serves as the metadata-table row in the index artifact set; the
/// content-vector matrix is row-aligned to the order records appear in
/// `records.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Stable identifier: `{domain}-{category}-{slug}` for principles,
    /// `{domain}-method-{slug}` for methods.
    pub id: String,
    /// Owning domain key.
    pub domain: String,
    /// Canonical category code (or "general").
    pub category: String,
    pub kind: RecordKind,
    /// Title as written in the source heading.
    pub title: String,
    /// Full body text (embedded as-is).
    pub text: String,
    /// Indicator fields found in the body. Never empty.
    pub fields: Vec<IndicatorField>,
}

impl Record {
    /// Blake3 hash of the body text, used as the embedding cache key.
    pub fn content_hash(&self) -> String {
        blake3::hash(self.text.as_bytes()).to_hex().to_string()
    }
}
