//! Deterministic hashed term-frequency provider.
//!
//! Projects unigram and bigram term frequencies into fixed-dimension
//! buckets chosen by a keyed blake3 hash, then L2-normalizes. Always
//! available, fully deterministic, and stable across processes — the same
//! text always yields the same vector.

use std::collections::HashMap;

use canon_core::errors::CanonResult;
use canon_core::traits::IEmbeddingProvider;

/// The local embedding model.
pub struct HashedTfProvider {
    dimensions: usize,
}

impl HashedTfProvider {
    /// Model identifier recorded in index manifests.
    pub const MODEL_ID: &'static str = "hashed-tf-v1";

    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Map a term to a bucket index with a keyed blake3 hash.
    fn bucket(term: &str, dims: usize) -> usize {
        let digest = blake3::hash(term.as_bytes());
        let bytes: [u8; 8] = digest.as_bytes()[..8].try_into().expect("8-byte prefix");
        (u64::from_le_bytes(bytes) as usize) % dims
    }

    /// Lowercase alphanumeric terms, two characters or longer.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.len() >= 2)
            .map(str::to_lowercase)
            .collect()
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        let mut counts: HashMap<String, f32> = HashMap::new();
        for tok in &tokens {
            *counts.entry(tok.clone()).or_default() += 1.0;
        }
        // Bigrams capture local phrase structure; weighted below unigrams.
        for pair in tokens.windows(2) {
            *counts.entry(format!("{} {}", pair[0], pair[1])).or_default() += 0.5;
        }

        let mut vec = vec![0.0f32; self.dimensions];
        for (term, count) in &counts {
            // Log scaling keeps repeated terms from dominating.
            let weight = 1.0 + count.ln_1p();
            vec[Self::bucket(term, self.dimensions)] += weight;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for HashedTfProvider {
    fn embed(&self, text: &str) -> CanonResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> CanonResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model_id(&self) -> &str {
        Self::MODEL_ID
    }

    fn is_available(&self) -> bool {
        true
    }
}
