//! Sample policy corpus shared by integration tests: two domains, three
//! documents, and a domain configuration file.

use std::fs;
use std::io;
use std::path::Path;

/// Domain configuration for the sample corpus.
pub const DOMAINS_TOML: &str = r#"
[domains.coding]
display_name = "Coding Governance"
description = "Principles and methods for software construction: specifications, requirements, tests, review, and how to handle incomplete specs"
priority = 10
sources = [
    { path = "coding/principles.md", kind = "principle" },
    { path = "coding/methods.md", kind = "method" },
]

[domains.coding.categories]
"Context Principles" = "context"
"Verification Principles" = "verify"

[domains.conduct]
display_name = "Constitutional Conduct"
description = "Core constitutional rules for agent conduct, escalation duties, and safety boundaries"
priority = 100
sources = [{ path = "conduct/principles.md", kind = "principle" }]

[domains.conduct.categories]
"Safety Principles" = "safety"
"#;

/// Principle document for the coding domain.
pub const CODING_PRINCIPLES: &str = r#"# Coding Governance

## Scope

This document governs software construction work.

## Context Principles

### Specification Completeness
**Definition**
A specification must state every requirement, constraint, and edge case
before work begins. When a task arrives with incomplete specs, handle the
gap by listing the missing requirements and escalating for clarification
instead of guessing.

**Rationale**
Guessed requirements produce confident-looking work that solves the wrong
problem.

### Assumption Surfacing
**Definition**
Every load-bearing assumption gets written down where the reviewer will see
it.

## Verification Principles

### Test Before Merge
**Definition**
No change merges without passing verification that exercises the changed
behavior.

### Connective Notes

These sections exist to bind the principles together and carry no
structured fields.
"#;

/// Method document for the coding domain.
pub const CODING_METHODS: &str = r#"# Coding Methods

## Methods

### Red Green Refactor
**Steps**
1. Write a failing test.
2. Make it pass.
3. Clean up with the test green.

### Spike And Stabilize
**Steps**
1. Prototype without ceremony.
2. Throw the prototype away.
3. Rebuild deliberately.
"#;

/// Principle document for the conduct domain.
pub const CONDUCT_PRINCIPLES: &str = r#"# Constitutional Conduct

## Safety Principles

### Escalation First
**Definition**
Irreversible or destructive operations always escalate to a human before
execution.

### Audit Everything
**Definition**
Every governed decision leaves an immutable audit trail.
"#;

/// Write the full sample corpus under `root`.
pub fn write_corpus(root: &Path) -> io::Result<()> {
    fs::create_dir_all(root.join("coding"))?;
    fs::create_dir_all(root.join("conduct"))?;
    fs::write(root.join("domains.toml"), DOMAINS_TOML)?;
    fs::write(root.join("coding/principles.md"), CODING_PRINCIPLES)?;
    fs::write(root.join("coding/methods.md"), CODING_METHODS)?;
    fs::write(root.join("conduct/principles.md"), CONDUCT_PRINCIPLES)?;
    Ok(())
}
