//! Seam traits: the embedding provider and the external judgment step.

mod embedding;
mod judgment;

pub use embedding::IEmbeddingProvider;
pub use judgment::{IJudgment, JudgmentDecision, JudgmentInput};
