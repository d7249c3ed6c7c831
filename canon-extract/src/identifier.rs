//! Deterministic identifier generation.
//!
//! `record_id` is a pure function of `(domain, kind, category, title)` —
//! re-extracting unchanged prose always reproduces the same id. Distinct
//! titles that slugify identically collide; the index builder logs the
//! collision and lets the later record win.

use canon_core::constants::MAX_SLUG_LEN;
use canon_core::models::RecordKind;

/// Normalize a title into a slug: lowercase, non-alphanumeric runs replaced
/// by a single hyphen, truncated to [`MAX_SLUG_LEN`] at a word boundary,
/// leading/trailing hyphens stripped.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_hyphen = true; // suppress a leading hyphen

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            slug.push('-');
            last_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.len() > MAX_SLUG_LEN {
        // Cut at the last word boundary inside the limit; hard-cut when the
        // first word alone exceeds it.
        let cut = slug[..=MAX_SLUG_LEN]
            .rfind('-')
            .unwrap_or(MAX_SLUG_LEN);
        slug.truncate(cut);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    slug
}

/// Derive the stable identifier for a record.
///
/// Principles: `{domain}-{category}-{slug}`. Methods: `{domain}-method-{slug}`.
pub fn record_id(domain: &str, kind: RecordKind, category: &str, title: &str) -> String {
    let segment = kind.id_segment().unwrap_or(category);
    format!("{}-{}-{}", domain, segment, slugify(title))
}
