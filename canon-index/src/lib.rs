//! # canon-index
//!
//! The index artifact lifecycle: shadow builds of co-versioned artifact
//! sets, an atomic pointer swap to activate them, an explicit active-index
//! handle for readers, structural integrity validation, and the
//! rebuild/validate operator entry points.
//!
//! A build either completes in full and becomes active via one atomic
//! rename, or it aborts leaving the previously active generation untouched.

pub mod active;
pub mod artifact;
pub mod builder;
pub mod ops;
pub mod validator;

pub use active::IndexHandle;
pub use artifact::LoadedIndex;
pub use builder::{BuildReport, IndexBuilder};
pub use validator::{IntegrityReport, IntegrityStatus};
