use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::record::RecordKind;

/// Reference to one source document of a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Path to the document, relative to the corpus root.
    pub path: String,
    /// What kind of records the document yields.
    pub kind: RecordKind,
}

/// Configuration for one governed domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Short namespace code, used as the identifier prefix (e.g. "coding").
    pub key: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Description embedded to form the domain-routing vector.
    pub description: String,
    /// Tie-break priority in retrieval ranking (higher = preferred).
    pub priority: u32,
    /// Source documents for this domain.
    pub sources: Vec<SourceRef>,
    /// Heading text → canonical category code. Headings absent from this
    /// map classify as "general".
    #[serde(default)]
    pub categories: BTreeMap<String, String>,
}

/// A domain entry that failed to parse and was skipped from the build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedDomain {
    pub key: String,
    pub reason: String,
}

/// The full set of domain configurations for one build.
#[derive(Debug, Clone, Default)]
pub struct DomainSet {
    /// Valid domains, in configuration order. Domain-routing vectors are
    /// row-aligned to this order.
    pub domains: Vec<DomainConfig>,
    /// Entries that were malformed and skipped.
    pub skipped: Vec<SkippedDomain>,
}

impl DomainSet {
    /// Parse a TOML document of the form:
    ///
    /// ```toml
    /// [domains.coding]
    /// display_name = "Coding Governance"
    /// description = "..."
    /// priority = 10
    /// sources = [{ path = "coding/principles.md", kind = "principle" }]
    /// [domains.coding.categories]
    /// "Context Principles" = "context"
    /// ```
    ///
    /// A malformed entry skips that domain only; the rest of the set still
    /// loads (the skip is reported on `skipped`).
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            domains: BTreeMap<String, toml::Value>,
        }

        #[derive(Deserialize)]
        struct RawDomain {
            display_name: String,
            description: String,
            priority: u32,
            sources: Vec<SourceRef>,
            #[serde(default)]
            categories: BTreeMap<String, String>,
        }

        let raw: Raw = toml::from_str(input)?;
        let mut set = DomainSet::default();

        for (key, value) in raw.domains {
            match value.try_into::<RawDomain>() {
                Ok(d) => set.domains.push(DomainConfig {
                    key,
                    display_name: d.display_name,
                    description: d.description,
                    priority: d.priority,
                    sources: d.sources,
                    categories: d.categories,
                }),
                Err(e) => set.skipped.push(SkippedDomain {
                    key,
                    reason: e.to_string(),
                }),
            }
        }

        Ok(set)
    }

    pub fn get(&self, key: &str) -> Option<&DomainConfig> {
        self.domains.iter().find(|d| d.key == key)
    }
}
