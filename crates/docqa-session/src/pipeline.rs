//! Document processing pipeline.
//!
//! Runs intake, loading, chunking, embedding, and indexing in order and
//! produces a queryable [`Session`]. Any stage failure aborts the whole
//! run; a partially processed document set is never exposed.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use docqa_answer::{Answerer, DEFAULT_TOP_K};
use docqa_core::{Answer, ChunkConfig, Completer, Embedder, Error, RawFile, Result, VectorIndex};
use docqa_index::MemoryIndex;
use tracing::{debug, info};

/// A processed document set, ready to answer questions.
pub struct Session {
    id: String,
    created_at: DateTime<Utc>,
    index: Arc<MemoryIndex>,
    answerer: Answerer,
}

impl Session {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of chunks indexed for this session.
    pub fn chunk_count(&self) -> usize {
        self.index.len()
    }

    /// Answer a question against this session's documents.
    pub async fn answer(&self, question: &str) -> Result<Answer> {
        self.answerer.answer(question, self.index.as_ref()).await
    }
}

/// Turns uploaded files into sessions.
///
/// Holds the embedder, completer, and chunking configuration shared by
/// every session it creates.
pub struct DocumentPipeline {
    embedder: Arc<dyn Embedder>,
    completer: Arc<dyn Completer>,
    chunk_config: ChunkConfig,
    top_k: usize,
}

impl DocumentPipeline {
    pub fn new(embedder: Arc<dyn Embedder>, completer: Arc<dyn Completer>) -> Self {
        Self {
            embedder,
            completer,
            chunk_config: ChunkConfig::default(),
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Override the chunking configuration.
    #[must_use]
    pub fn with_chunk_config(mut self, config: ChunkConfig) -> Self {
        self.chunk_config = config;
        self
    }

    /// Override the number of chunks retrieved per question.
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Process uploaded files into a session with the given id.
    ///
    /// Fails with [`Error::NoValidFiles`] when intake yields no supported
    /// documents, and propagates the first parse, embedding, or indexing
    /// failure otherwise.
    pub async fn process(&self, id: &str, files: &[RawFile]) -> Result<Session> {
        let blobs = docqa_extract::extract_documents(files);
        if blobs.is_empty() {
            return Err(Error::NoValidFiles);
        }
        debug!(session = id, blobs = blobs.len(), "intake complete");

        let documents = docqa_extract::load_documents(&blobs).await?;
        let chunks = docqa_chunker::split_documents(&documents, &self.chunk_config)?;
        if chunks.is_empty() {
            return Err(Error::NoExtractableText);
        }
        debug!(session = id, chunks = chunks.len(), "documents chunked");

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        let embeddings = self.embedder.embed(&texts).await?;
        let index = MemoryIndex::build(chunks, embeddings)?;

        info!(
            session = id,
            documents = documents.len(),
            chunks = index.len(),
            "session processed"
        );

        Ok(Session {
            id: id.to_string(),
            created_at: Utc::now(),
            index: Arc::new(index),
            answerer: Answerer::new(self.embedder.clone(), self.completer.clone())
                .with_top_k(self.top_k),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    use docqa_answer::StaticCompleter;
    use docqa_embed::HashEmbedder;
    use zip::write::FileOptions;

    fn pipeline() -> DocumentPipeline {
        DocumentPipeline::new(
            Arc::new(HashEmbedder::default()),
            Arc::new(StaticCompleter::new("stub answer")),
        )
    }

    fn docx_file(name: &str, paragraphs: &[&str]) -> RawFile {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
            .collect();
        let xml = format!("<w:document><w:body>{body}</w:body></w:document>");

        let mut cursor = Cursor::new(Vec::new());
        let mut writer = zip::ZipWriter::new(&mut cursor);
        writer
            .start_file("word/document.xml", FileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap();
        drop(writer);

        RawFile::new(name, cursor.into_inner())
    }

    #[tokio::test]
    async fn test_process_rejects_empty_upload() {
        let result = pipeline().process("s1", &[]).await;
        assert!(matches!(result, Err(Error::NoValidFiles)));
    }

    #[tokio::test]
    async fn test_process_rejects_unsupported_files_only() {
        let files = vec![
            RawFile::new("notes.txt", b"plain text".to_vec()),
            RawFile::new("image.png", vec![0x89, 0x50, 0x4e, 0x47]),
        ];
        let result = pipeline().process("s1", &files).await;
        assert!(matches!(result, Err(Error::NoValidFiles)));
    }

    #[tokio::test]
    async fn test_process_aborts_on_corrupt_document() {
        let files = vec![RawFile::new("broken.pdf", b"not a pdf at all".to_vec())];
        let result = pipeline().process("s1", &files).await;
        assert!(matches!(result, Err(Error::Load(_))));
    }

    #[tokio::test]
    async fn test_process_rejects_documents_without_text() {
        // Parses fine, but the body holds no paragraphs at all.
        let files = vec![docx_file("blank.docx", &[])];
        let result = pipeline().process("s1", &files).await;
        assert!(matches!(result, Err(Error::NoExtractableText)));
    }

    #[tokio::test]
    async fn test_process_builds_queryable_session() {
        let before = Utc::now();
        let files = vec![docx_file(
            "facts.docx",
            &["The capital of France is Paris."],
        )];

        let session = pipeline().process("s1", &files).await.unwrap();

        assert_eq!(session.id(), "s1");
        assert!(session.chunk_count() > 0);
        assert!(session.created_at() >= before);
        assert!(session.created_at() <= Utc::now());

        let answer = session.answer("What is the capital of France?").await.unwrap();
        assert_eq!(answer.answer, "stub answer");
        assert!(answer.context.iter().any(|c| c.text.contains("Paris")));
    }
}
