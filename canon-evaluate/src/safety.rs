//! Deterministic safety scan (the S-series triggers).
//!
//! A fixed keyword/pattern set scanned with a `RegexSet` — no model, no
//! index access, no external calls, so the scan keeps its veto power under
//! fully degraded conditions. The built-in set cannot be removed through
//! configuration; deployments may only extend it.

use canon_core::config::SafetyConfig;
use regex::RegexSet;
use tracing::warn;

/// Built-in trigger patterns, each with a stable label for audit trails.
const BUILTIN_TRIGGERS: [(&str, &str); 6] = [
    (
        "s1-data-destruction",
        r"(?i)\b(delete|drop|truncate|wipe|purge)\b.{0,40}\b(production|prod|database|table|backup)\b",
    ),
    (
        "s2-credential-exposure",
        r"(?i)\b(exfiltrate|leak|dump|export)\b.{0,40}\b(credential|secret|token|key|password)s?\b",
    ),
    (
        "s3-safety-bypass",
        r"(?i)\b(bypass|disable|skip|remove)\b.{0,40}\b(safety|review|approval|guardrail|audit|monitoring)s?\b",
    ),
    (
        "s4-privilege-escalation",
        r"(?i)\b(escalate|grant|elevate)\b.{0,40}\b(privilege|root|admin|sudo)s?\b",
    ),
    (
        "s5-irreversible-infra",
        r"(?i)\brm\s+-rf\b|\bforce[- ]push\b.{0,20}\bmain\b|\bdestroy\b.{0,30}\b(cluster|infrastructure)\b",
    ),
    (
        "s6-policy-tamper",
        r"(?i)\b(rewrite|alter|falsify)\b.{0,40}\b(audit|compliance|policy)\b.{0,20}\b(log|record|history)s?\b",
    ),
];

/// The compiled trigger set.
pub struct SafetyScan {
    set: RegexSet,
    labels: Vec<String>,
}

impl SafetyScan {
    /// Compile the built-in triggers plus any configured extras.
    ///
    /// A malformed extra pattern is skipped with a warning; it can never
    /// take the built-in set down with it. Returns `None` only if the
    /// built-in set itself fails to compile — callers must treat that as
    /// an unconditional-escalation condition.
    pub fn new(config: &SafetyConfig) -> Option<Self> {
        let mut patterns: Vec<String> = Vec::new();
        let mut labels: Vec<String> = Vec::new();

        for (label, pattern) in BUILTIN_TRIGGERS {
            patterns.push(pattern.to_string());
            labels.push(label.to_string());
        }

        for (i, extra) in config.extra_patterns.iter().enumerate() {
            if regex::Regex::new(extra).is_err() {
                warn!(pattern = %extra, "invalid extra safety pattern, skipping");
                continue;
            }
            patterns.push(extra.clone());
            labels.push(format!("sx{}-configured", i + 1));
        }

        match RegexSet::new(&patterns) {
            Ok(set) => Some(Self { set, labels }),
            Err(e) => {
                warn!(error = %e, "safety trigger set failed to compile");
                None
            }
        }
    }

    /// Scan action text; returns the label of the first matching trigger.
    pub fn scan(&self, text: &str) -> Option<&str> {
        self.set
            .matches(text)
            .iter()
            .next()
            .map(|i| self.labels[i].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan() -> SafetyScan {
        SafetyScan::new(&SafetyConfig::default()).expect("builtin set compiles")
    }

    #[test]
    fn benign_text_does_not_trigger() {
        assert_eq!(scan().scan("refactor the parser for clearer errors"), None);
    }

    #[test]
    fn production_deletion_triggers() {
        assert_eq!(
            scan().scan("please delete production data for customer 7"),
            Some("s1-data-destruction")
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(scan().scan("DROP the main TABLE now").is_some());
        assert!(scan().scan("Bypass Review and merge").is_some());
    }

    #[test]
    fn extra_patterns_extend_the_set() {
        let s = SafetyScan::new(&SafetyConfig {
            extra_patterns: vec![r"(?i)launch\s+the\s+rocket".to_string()],
        })
        .unwrap();
        assert_eq!(s.scan("Launch the rocket"), Some("sx1-configured"));
    }

    #[test]
    fn invalid_extra_pattern_is_skipped_not_fatal() {
        let s = SafetyScan::new(&SafetyConfig {
            extra_patterns: vec!["(unclosed".to_string()],
        })
        .unwrap();
        // Builtins still active.
        assert!(s.scan("wipe the production database").is_some());
    }

    #[test]
    fn scan_is_deterministic() {
        let s = scan();
        let text = "exfiltrate the tokens then disable monitoring";
        assert_eq!(s.scan(text), s.scan(text));
    }
}
