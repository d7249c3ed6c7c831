//! On-disk artifact set: one directory per generation, plus the `CURRENT`
//! pointer file naming the active generation.
//!
//! The pointer is only ever replaced by an atomic rename, so concurrent
//! readers see either the old generation or the new one, never a partial
//! mix.

use std::fs;
use std::path::{Path, PathBuf};

use canon_core::constants::{
    CURRENT_POINTER, DOMAIN_VECTORS_FILE, MANIFEST_FILE, RECORDS_FILE, RECORD_VECTORS_FILE,
};
use canon_core::errors::{CanonResult, IndexError};
use canon_core::models::{IndexManifest, Record};
use tracing::debug;

/// A fully loaded index generation, immutable once read.
#[derive(Debug, Clone)]
pub struct LoadedIndex {
    pub manifest: IndexManifest,
    /// Metadata table; content vectors are row-aligned to this order.
    pub records: Vec<Record>,
    /// One row per record.
    pub record_vectors: Vec<Vec<f32>>,
    /// One row per manifest domain.
    pub domain_vectors: Vec<Vec<f32>>,
}

impl LoadedIndex {
    pub fn record_by_id(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }
}

pub fn generation_dir(root: &Path, generation: &str) -> PathBuf {
    root.join(generation)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> CanonResult<T> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> CanonResult<()> {
    fs::write(path, serde_json::to_vec(value)?)?;
    Ok(())
}

/// Write a complete artifact set into a (shadow) generation directory.
pub fn write_generation(root: &Path, index: &LoadedIndex) -> CanonResult<()> {
    let dir = generation_dir(root, &index.manifest.generation);
    fs::create_dir_all(&dir)?;
    write_json(&dir.join(MANIFEST_FILE), &index.manifest)?;
    write_json(&dir.join(RECORDS_FILE), &index.records)?;
    write_json(&dir.join(RECORD_VECTORS_FILE), &index.record_vectors)?;
    write_json(&dir.join(DOMAIN_VECTORS_FILE), &index.domain_vectors)?;
    debug!(generation = %index.manifest.generation, dir = %dir.display(), "artifact set written");
    Ok(())
}

/// Read a complete artifact set from a generation directory.
pub fn read_generation(root: &Path, generation: &str) -> CanonResult<LoadedIndex> {
    let dir = generation_dir(root, generation);
    let require = |name: &str| -> CanonResult<PathBuf> {
        let path = dir.join(name);
        if !path.exists() {
            return Err(IndexError::MissingArtifact {
                name: name.to_string(),
                generation: generation.to_string(),
            }
            .into());
        }
        Ok(path)
    };

    Ok(LoadedIndex {
        manifest: read_json(&require(MANIFEST_FILE)?)?,
        records: read_json(&require(RECORDS_FILE)?)?,
        record_vectors: read_json(&require(RECORD_VECTORS_FILE)?)?,
        domain_vectors: read_json(&require(DOMAIN_VECTORS_FILE)?)?,
    })
}

/// Read the active-generation pointer, if any.
pub fn read_pointer(root: &Path) -> CanonResult<Option<String>> {
    let path = root.join(CURRENT_POINTER);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let generation = content.trim().to_string();
    if generation.is_empty() {
        return Ok(None);
    }
    Ok(Some(generation))
}

/// Atomically repoint `CURRENT` at a generation: write a sibling temp file,
/// then rename over the pointer. The rename is the swap.
pub fn write_pointer(root: &Path, generation: &str) -> CanonResult<()> {
    fs::create_dir_all(root)?;
    let tmp = root.join(format!("{CURRENT_POINTER}.tmp"));
    fs::write(&tmp, format!("{generation}\n"))?;
    fs::rename(&tmp, root.join(CURRENT_POINTER))?;
    debug!(generation, "active-index pointer swapped");
    Ok(())
}

/// Delete a generation directory (shadow discard or garbage collection).
pub fn remove_generation(root: &Path, generation: &str) -> CanonResult<()> {
    let dir = generation_dir(root, generation);
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    Ok(())
}

/// List generation directories under the root, unordered.
pub fn list_generations(root: &Path) -> CanonResult<Vec<String>> {
    if !root.exists() {
        return Ok(Vec::new());
    }
    let mut generations = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            generations.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(generations)
}
