//! Source document model and heading-aware sectioning.

use regex::Regex;
use std::sync::OnceLock;

/// A named policy document belonging to exactly one domain.
///
/// Immutable once read by a build; a new version is a new document.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Owning domain key.
    pub domain: String,
    /// Document name (usually the source path).
    pub name: String,
    /// Version string from the authoring process.
    pub version: String,
    /// Raw document text.
    pub text: String,
}

/// One span of a document: a heading plus the body up to the next heading
/// of the same or shallower level.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// ATX heading level (1–6).
    pub level: usize,
    /// Heading text, trimmed.
    pub heading: String,
    /// Body lines joined, trimmed. May be empty.
    pub body: String,
}

fn heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.+?)\s*$").expect("valid heading regex"))
}

/// Split raw text into sections. Text before the first heading is dropped
/// (it belongs to no section). Total: any input yields a (possibly empty)
/// section list.
pub fn split_sections(text: &str) -> Vec<Section> {
    let re = heading_re();
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<(usize, String, Vec<&str>)> = None;

    for line in text.lines() {
        if let Some(caps) = re.captures(line) {
            if let Some((level, heading, body)) = current.take() {
                sections.push(Section {
                    level,
                    heading,
                    body: body.join("\n").trim().to_string(),
                });
            }
            let level = caps[1].len();
            let heading = caps[2].to_string();
            current = Some((level, heading, Vec::new()));
        } else if let Some((_, _, body)) = current.as_mut() {
            body.push(line);
        }
    }

    if let Some((level, heading, body)) = current {
        sections.push(Section {
            level,
            heading,
            body: body.join("\n").trim().to_string(),
        });
    }

    sections
}
