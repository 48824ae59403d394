//! In-memory vector index.
//!
//! Brute-force cosine similarity over the chunks of one processed
//! document set. Built once, immutable afterwards, discarded with its
//! session. Keeps the core pipeline testable with no external service.

use async_trait::async_trait;
use docqa_core::{Chunk, IndexError, ScoredChunk, VectorIndex};
use tracing::debug;

/// Immutable in-memory index over (embedding, chunk) pairs.
pub struct MemoryIndex {
    dimension: usize,
    entries: Vec<(Vec<f32>, Chunk)>,
}

impl MemoryIndex {
    /// Build an index from chunks and their embeddings.
    ///
    /// The two sequences must have equal length and every embedding the
    /// same dimension. An empty document set cannot be indexed.
    pub fn build(chunks: Vec<Chunk>, embeddings: Vec<Vec<f32>>) -> Result<Self, IndexError> {
        if chunks.len() != embeddings.len() {
            return Err(IndexError::CountMismatch {
                chunks: chunks.len(),
                embeddings: embeddings.len(),
            });
        }
        let Some(first) = embeddings.first() else {
            return Err(IndexError::Empty);
        };

        let dimension = first.len();
        for embedding in &embeddings {
            if embedding.len() != dimension {
                return Err(IndexError::Dimension {
                    expected: dimension,
                    got: embedding.len(),
                });
            }
        }

        debug!("built index over {} chunks (dimension {})", chunks.len(), dimension);
        Ok(Self {
            dimension,
            entries: embeddings.into_iter().zip(chunks).collect(),
        })
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        dot / (norm_a * norm_b)
    }
}

#[async_trait]
impl VectorIndex for MemoryIndex {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn search(&self, query: &[f32], k: usize) -> Result<Vec<ScoredChunk>, IndexError> {
        if query.len() != self.dimension {
            return Err(IndexError::Dimension {
                expected: self.dimension,
                got: query.len(),
            });
        }

        let mut scored: Vec<(f32, &Chunk)> = self
            .entries
            .iter()
            .map(|(embedding, chunk)| (Self::cosine_similarity(query, embedding), chunk))
            .collect();

        // Stable sort keeps original chunk order for equal scores.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(k)
            .map(|(score, chunk)| ScoredChunk {
                chunk: chunk.clone(),
                score,
            })
            .collect())
    }
}
