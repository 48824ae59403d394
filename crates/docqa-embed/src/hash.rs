//! Deterministic offline embedder.
//!
//! [`HashEmbedder`] maps each lowercased alphanumeric token into one of
//! `dimension` buckets via blake3 and L2-normalizes the counts. Texts
//! sharing tokens score high under cosine similarity, so retrieval
//! behaves sensibly without any model or network. Useful for tests,
//! development builds, and air-gapped runs.

use async_trait::async_trait;
use docqa_core::{EmbedError, Embedder};

const DEFAULT_DIMENSION: usize = 384;

/// Bag-of-tokens hash embedder.
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    /// Create an embedder with the default dimension (384).
    #[must_use]
    pub fn new() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
        }
    }

    /// Create an embedder with a custom dimension.
    #[must_use]
    pub fn with_dimension(dimension: usize) -> Self {
        Self { dimension }
    }

    fn bucket(&self, token: &str) -> usize {
        let hash = blake3::hash(token.as_bytes());
        let bytes = hash.as_bytes();
        let value = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        value as usize % self.dimension
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];
        for token in text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            vector[self.bucket(token)] += 1.0;
        }

        let norm: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    fn model_name(&self) -> &str {
        "hash-bow"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cosine(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[tokio::test]
    async fn test_dimension() {
        let embedder = HashEmbedder::new();
        let vectors = embedder.embed(&["hello world"]).await.unwrap();
        assert_eq!(vectors[0].len(), 384);
    }

    #[tokio::test]
    async fn test_custom_dimension() {
        let embedder = HashEmbedder::with_dimension(64);
        let vectors = embedder.embed(&["hello"]).await.unwrap();
        assert_eq!(vectors[0].len(), 64);
    }

    #[tokio::test]
    async fn test_deterministic() {
        let embedder = HashEmbedder::new();
        let a = embedder.embed(&["the capital of France"]).await.unwrap();
        let b = embedder.embed(&["the capital of France"]).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_normalized() {
        let embedder = HashEmbedder::new();
        let vectors = embedder.embed(&["some words to embed here"]).await.unwrap();
        let norm: f32 = vectors[0].iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_empty_text_is_zero_vector() {
        let embedder = HashEmbedder::new();
        let vectors = embedder.embed(&[""]).await.unwrap();
        assert!(vectors[0].iter().all(|&v| v == 0.0));
    }

    #[tokio::test]
    async fn test_token_overlap_drives_similarity() {
        let embedder = HashEmbedder::new();
        let vectors = embedder
            .embed(&[
                "the capital of France is Paris",
                "what is the capital of France",
                "rust memory safety without garbage collection",
            ])
            .await
            .unwrap();

        let related = cosine(&vectors[0], &vectors[1]);
        let unrelated = cosine(&vectors[0], &vectors[2]);
        assert!(
            related > unrelated,
            "related texts should score higher ({related} vs {unrelated})"
        );
    }

    #[tokio::test]
    async fn test_case_insensitive_tokens() {
        let embedder = HashEmbedder::new();
        let vectors = embedder.embed(&["Paris FRANCE", "paris france"]).await.unwrap();
        assert_eq!(vectors[0], vectors[1]);
    }

    #[tokio::test]
    async fn test_batch_order_matches_input() {
        let embedder = HashEmbedder::new();
        let batch = embedder.embed(&["alpha", "beta"]).await.unwrap();
        let alpha = embedder.embed(&["alpha"]).await.unwrap();
        let beta = embedder.embed(&["beta"]).await.unwrap();
        assert_eq!(batch[0], alpha[0]);
        assert_eq!(batch[1], beta[0]);
    }
}
