//! The active-index handle: an explicit, versioned handle with
//! `load()`/`swap()`/`current()` instead of ambient global state.
//!
//! Queries hold an `Arc` to one immutable loaded generation; the build path
//! is serialized by a build lock. The pointer rename inside `swap()` is the
//! only synchronization point between the two paths.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use canon_core::config::IndexConfig;
use canon_core::errors::{CanonResult, IndexError};
use tracing::info;

use crate::artifact::{self, LoadedIndex};
use crate::validator;

/// Handle to the active index for one artifact root.
pub struct IndexHandle {
    root: PathBuf,
    active: RwLock<Option<Arc<LoadedIndex>>>,
    build_lock: Mutex<()>,
}

impl IndexHandle {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            active: RwLock::new(None),
            build_lock: Mutex::new(()),
        }
    }

    /// Open a handle at the configured artifact directory: explicit config,
    /// then the `CANON_INDEX_DIR` override, then the built-in default.
    pub fn open_default(config: &IndexConfig) -> Self {
        Self::open(config.resolve_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// (Re)load the generation named by the `CURRENT` pointer.
    ///
    /// The loaded artifacts are integrity-checked before they become
    /// visible to readers; a corrupt set is rejected here, never served.
    pub fn load(&self) -> CanonResult<Arc<LoadedIndex>> {
        let generation = artifact::read_pointer(&self.root)?.ok_or(IndexError::NoActiveIndex)?;
        let index = artifact::read_generation(&self.root, &generation)?;

        let problems = validator::check_loaded(&index);
        if !problems.is_empty() {
            return Err(IndexError::Corrupt {
                details: problems.join("; "),
            }
            .into());
        }

        let index = Arc::new(index);
        *self.active.write().expect("active lock poisoned") = Some(Arc::clone(&index));
        info!(
            generation = %index.manifest.generation,
            records = index.manifest.record_count,
            "active index loaded"
        );
        Ok(index)
    }

    /// The currently loaded generation, loading from disk on first use.
    pub fn current(&self) -> CanonResult<Arc<LoadedIndex>> {
        if let Some(index) = self.active.read().expect("active lock poisoned").as_ref() {
            return Ok(Arc::clone(index));
        }
        self.load()
    }

    /// Activate a fully written generation: verify it, atomically repoint
    /// `CURRENT`, and publish it to readers.
    ///
    /// On any failure before the rename, the previous generation stays
    /// active and untouched.
    pub fn swap(&self, generation: &str) -> CanonResult<Arc<LoadedIndex>> {
        let index = artifact::read_generation(&self.root, generation)?;
        let problems = validator::check_loaded(&index);
        if !problems.is_empty() {
            return Err(IndexError::Corrupt {
                details: problems.join("; "),
            }
            .into());
        }

        artifact::write_pointer(&self.root, generation)?;

        let index = Arc::new(index);
        *self.active.write().expect("active lock poisoned") = Some(Arc::clone(&index));
        info!(generation, "index generation activated");
        Ok(index)
    }

    /// Acquire the build lock; concurrent rebuilds are rejected, not queued.
    pub(crate) fn begin_build(&self) -> CanonResult<MutexGuard<'_, ()>> {
        self.build_lock
            .try_lock()
            .map_err(|_| IndexError::BuildInProgress.into())
    }
}
