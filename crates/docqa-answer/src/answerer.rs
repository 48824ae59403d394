//! Retrieval-grounded answer synthesis.
//!
//! Embeds the question, retrieves the top-k most similar chunks, and
//! asks the language model to answer using only that context.

use std::sync::Arc;

use docqa_core::{Answer, Completer, Embedder, Result, ScoredChunk, VectorIndex};
use tracing::debug;

/// Default number of chunks retrieved per question.
pub const DEFAULT_TOP_K: usize = 3;

/// Answers questions against a vector index using an embedder for
/// retrieval and a completer for synthesis.
pub struct Answerer {
    embedder: Arc<dyn Embedder>,
    completer: Arc<dyn Completer>,
    top_k: usize,
}

impl Answerer {
    pub fn new(embedder: Arc<dyn Embedder>, completer: Arc<dyn Completer>) -> Self {
        Self {
            embedder,
            completer,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Override the number of chunks retrieved per question.
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Answer `question` grounded in the contents of `index`.
    ///
    /// The returned [`Answer`] carries the retrieved chunks alongside the
    /// model's response, in retrieval order.
    pub async fn answer(&self, question: &str, index: &dyn VectorIndex) -> Result<Answer> {
        let query = self.embedder.embed_query(question).await?;
        let hits = index.search(&query, self.top_k).await?;

        debug!(
            retrieved = hits.len(),
            top_k = self.top_k,
            "retrieved context for question"
        );

        let prompt = build_prompt(question, &hits);
        let answer = self.completer.complete(&prompt).await?;

        Ok(Answer {
            answer,
            context: hits.into_iter().map(|hit| hit.chunk).collect(),
        })
    }
}

fn build_prompt(question: &str, hits: &[ScoredChunk]) -> String {
    let mut prompt = String::from(
        "Answer the question using only the context below. \
         If the context does not contain the answer, say so.\n\nContext:\n",
    );

    for hit in hits {
        let source = hit.chunk.source().unwrap_or("unknown");
        prompt.push_str(&format!("[{source}]\n{}\n\n", hit.chunk.text));
    }

    prompt.push_str(&format!("Question: {question}\nAnswer:"));
    prompt
}
