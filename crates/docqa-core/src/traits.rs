//! Core traits for docqa components.
//!
//! - [`Embedder`]: map text to fixed-dimension vectors
//! - [`Completer`]: produce a completion for a prompt
//! - [`VectorIndex`]: k-nearest-neighbor search over embedded chunks
//!
//! Each trait has one production adapter and one offline adapter, so the
//! whole pipeline can be exercised without network access.

use async_trait::async_trait;

use crate::error::{CompletionError, EmbedError, IndexError};
use crate::types::ScoredChunk;

/// Trait for generating embeddings.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Model name/identifier.
    fn model_name(&self) -> &str;

    /// Embedding dimension, fixed for the lifetime of the embedder.
    fn dimension(&self) -> usize;

    /// Embed a batch of texts. Output order matches input order, and every
    /// vector has length [`Embedder::dimension`].
    async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError>;

    /// Embed a single query string.
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let results = self.embed(&[text]).await?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| EmbedError::Inference("empty embedding result".to_string()))
    }
}

/// Trait for language model completion.
#[async_trait]
pub trait Completer: Send + Sync {
    /// Model name/identifier.
    fn model_name(&self) -> &str;

    /// Produce a completion for the given prompt.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Trait for similarity search over one processed document set.
///
/// An index is immutable after construction; it is built once during
/// processing and queried for the lifetime of its session.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Number of indexed chunks.
    fn len(&self) -> usize;

    /// Whether the index holds no chunks.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Embedding dimension the index was built with.
    fn dimension(&self) -> usize;

    /// Return up to `k` chunks ordered by decreasing similarity to the
    /// query embedding. Ties preserve original chunk order.
    async fn search(&self, query: &[f32], k: usize) -> Result<Vec<ScoredChunk>, IndexError>;
}
