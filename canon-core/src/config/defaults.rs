//! Default values shared by the config structs.

pub const DEFAULT_EMBEDDING_PROVIDER: &str = "hashed-tf-v1";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 256;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 32;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 4096;

pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_DOMAIN_SHORTLIST: usize = 2;
pub const DEFAULT_PRIORITY_WEIGHT: f64 = 0.05;
pub const DEFAULT_ROUTING_EPSILON: f64 = 0.02;
pub const DEFAULT_LOW_CONFIDENCE_THRESHOLD: f64 = 0.3;

pub const DEFAULT_KEEP_GENERATIONS: usize = 2;
