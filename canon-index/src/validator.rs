//! Structural and dimensional integrity checks for index artifacts.
//!
//! Any failure is "index corrupt" — there is no partial repair. The only
//! sanctioned recovery is a full rebuild from source documents.

use std::path::Path;

use canon_core::errors::{CanonResult, IndexError};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::artifact::{self, LoadedIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrityStatus {
    Ok,
    Corrupt,
}

/// Result of validating the active artifact set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrityReport {
    /// Generation that was inspected.
    pub generation: String,
    pub status: IntegrityStatus,
    /// One entry per detected problem; empty when status is Ok.
    pub problems: Vec<String>,
}

/// Check an in-memory artifact set: row parity and one shared
/// dimensionality across both matrices.
pub fn check_loaded(index: &LoadedIndex) -> Vec<String> {
    let mut problems = Vec::new();
    let dims = index.manifest.dimensions;

    if index.records.len() != index.manifest.record_count {
        problems.push(format!(
            "metadata table has {} rows, manifest says {}",
            index.records.len(),
            index.manifest.record_count
        ));
    }
    if index.record_vectors.len() != index.records.len() {
        problems.push(format!(
            "content-vector matrix has {} rows, metadata table has {}",
            index.record_vectors.len(),
            index.records.len()
        ));
    }
    if index.domain_vectors.len() != index.manifest.domains.len() {
        problems.push(format!(
            "domain-vector matrix has {} rows, manifest lists {} domains",
            index.domain_vectors.len(),
            index.manifest.domains.len()
        ));
    }
    for (i, v) in index.record_vectors.iter().enumerate() {
        if v.len() != dims {
            problems.push(format!(
                "content vector {} has {} dimensions, expected {}",
                i,
                v.len(),
                dims
            ));
            break;
        }
    }
    for (i, v) in index.domain_vectors.iter().enumerate() {
        if v.len() != dims {
            problems.push(format!(
                "domain vector {} has {} dimensions, expected {}",
                i,
                v.len(),
                dims
            ));
            break;
        }
    }

    problems
}

/// Validate the active generation on disk.
///
/// Parse failures count as corruption (reported, not propagated); only a
/// missing pointer is an error, since there is nothing to inspect.
pub fn validate_active(root: &Path) -> CanonResult<IntegrityReport> {
    let generation = artifact::read_pointer(root)?.ok_or(IndexError::NoActiveIndex)?;

    let index = match artifact::read_generation(root, &generation) {
        Ok(index) => index,
        Err(e) => {
            warn!(generation = %generation, error = %e, "artifact set unreadable");
            return Ok(IntegrityReport {
                generation,
                status: IntegrityStatus::Corrupt,
                problems: vec![format!("artifact set unreadable: {e}")],
            });
        }
    };

    let problems = check_loaded(&index);
    let status = if problems.is_empty() {
        IntegrityStatus::Ok
    } else {
        warn!(generation = %generation, ?problems, "index corrupt");
        IntegrityStatus::Corrupt
    };

    Ok(IntegrityReport {
        generation,
        status,
        problems,
    })
}
