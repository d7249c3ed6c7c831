//! Category classification: heading text → canonical category code.
//!
//! Total by contract — an unmapped heading degrades to "general" so that
//! extraction never blocks on an unrecognized heading.

use canon_core::constants::GENERAL_CATEGORY;
use canon_core::models::DomainConfig;
use tracing::debug;

fn normalize(heading: &str) -> String {
    heading.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Look up the canonical category code for a category-source heading.
///
/// Matching is case- and whitespace-insensitive. Always returns a code.
pub fn classify(config: &DomainConfig, heading: &str) -> String {
    let wanted = normalize(heading);
    for (mapped_heading, code) in &config.categories {
        if normalize(mapped_heading) == wanted {
            return code.clone();
        }
    }
    debug!(domain = %config.key, heading, "unmapped heading, falling back to general");
    GENERAL_CATEGORY.to_string()
}
