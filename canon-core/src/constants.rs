/// Canon system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum slug length for record identifiers (truncated at a word boundary).
pub const MAX_SLUG_LEN: usize = 48;

/// Category code assigned when a heading has no entry in the domain's map.
pub const GENERAL_CATEGORY: &str = "general";

/// Name of the pointer file that names the active index generation.
pub const CURRENT_POINTER: &str = "CURRENT";

/// Artifact file names within a generation directory.
pub const MANIFEST_FILE: &str = "manifest.json";
pub const RECORDS_FILE: &str = "records.json";
pub const RECORD_VECTORS_FILE: &str = "record_vectors.json";
pub const DOMAIN_VECTORS_FILE: &str = "domain_vectors.json";

/// Environment variable overriding the index artifact directory.
pub const INDEX_DIR_ENV: &str = "CANON_INDEX_DIR";

/// Default index artifact directory, relative to the data root.
pub const DEFAULT_INDEX_DIR: &str = ".canon/index";
