//! Core types for docqa.
//!
//! This module contains the shared data structures used across the pipeline:
//!
//! ## Intake
//! - [`RawFile`]: An uploaded file as received from the caller
//! - [`DocumentKind`]: Supported document formats
//! - [`ExtractedBlob`]: Bytes of a single supported document
//!
//! ## Documents and Chunks
//! - [`Document`]: Parsed text plus source metadata
//! - [`Chunk`]: A bounded span of document text, the unit of retrieval
//! - [`ChunkConfig`]: Configuration for chunking behavior
//!
//! ## Retrieval
//! - [`ScoredChunk`]: A chunk with its similarity score
//! - [`Answer`]: Model output plus the retrieved context chunks

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata key under which a chunk's originating file name is recorded.
pub const SOURCE_KEY: &str = "source";

// ============================================================================
// Intake
// ============================================================================

/// An uploaded file, as handed to the pipeline by the caller.
///
/// Ephemeral: consumed during processing and never persisted.
#[derive(Debug, Clone)]
pub struct RawFile {
    /// Original file name, used for extension-based filtering
    pub name: String,
    /// Raw file bytes
    pub content: Vec<u8>,
}

impl RawFile {
    /// Create a new raw file from a name and its bytes.
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}

/// Document formats the loader can parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Classify a file name by extension (ASCII case-insensitive).
    ///
    /// Returns `None` for anything that is not a supported document.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if lower.ends_with(".docx") {
            Some(Self::Docx)
        } else {
            None
        }
    }
}

/// Bytes of exactly one supported document, produced by intake.
///
/// Only files with supported extensions survive extraction; ZIP entries
/// are filtered the same way.
#[derive(Debug, Clone)]
pub struct ExtractedBlob {
    /// Name of the originating file or archive entry
    pub source: String,
    /// Detected document format
    pub kind: DocumentKind,
    /// Decompressed document bytes
    pub data: Vec<u8>,
}

// ============================================================================
// Documents
// ============================================================================

/// A parsed document: plain text content plus source metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Extracted text content
    pub text: String,
    /// Source metadata, carried into every chunk (at least [`SOURCE_KEY`])
    pub metadata: BTreeMap<String, String>,
}

impl Document {
    /// Create a document with its source name recorded in metadata.
    pub fn new(text: impl Into<String>, source: &str) -> Self {
        let mut metadata = BTreeMap::new();
        metadata.insert(SOURCE_KEY.to_string(), source.to_string());
        Self {
            text: text.into(),
            metadata,
        }
    }

    /// The source name this document was parsed from, if recorded.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.metadata.get(SOURCE_KEY).map(String::as_str)
    }
}

// ============================================================================
// Chunks
// ============================================================================

/// A bounded span of document text, the unit of retrieval.
///
/// Chunks carry no generated identifiers: splitting the same document
/// twice with the same configuration yields identical chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk text, at most [`ChunkConfig::chunk_size`] characters
    pub text: String,
    /// Position within the source document (0-indexed)
    pub chunk_index: u32,
    /// Metadata inherited from the parent document
    pub metadata: BTreeMap<String, String>,
}

impl Chunk {
    /// The source name this chunk traces back to, if recorded.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.metadata.get(SOURCE_KEY).map(String::as_str)
    }
}

/// Configuration for chunking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Maximum chunk size in characters
    pub chunk_size: usize,
    /// Overlap between consecutive chunks in characters
    pub overlap: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            overlap: 200,
        }
    }
}

// ============================================================================
// Retrieval
// ============================================================================

/// A chunk returned from a similarity search, with its score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredChunk {
    /// The matching chunk
    pub chunk: Chunk,
    /// Similarity score (higher is more similar)
    pub score: f32,
}

/// The result of answering a question: the model's response plus the
/// chunks retrieved to ground it.
///
/// `context` always reflects the retrieval step, never the model's
/// internal behavior.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    /// The language model's response, verbatim
    pub answer: String,
    /// The retrieved chunks supplied to the model as grounding
    pub context: Vec<Chunk>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_kind_from_name() {
        assert_eq!(DocumentKind::from_name("report.pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_name("notes.docx"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_name("archive.zip"), None);
        assert_eq!(DocumentKind::from_name("readme.txt"), None);
        assert_eq!(DocumentKind::from_name("noextension"), None);
    }

    #[test]
    fn test_document_kind_case_insensitive() {
        assert_eq!(DocumentKind::from_name("Report.PDF"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_name("NOTES.DocX"), Some(DocumentKind::Docx));
    }

    #[test]
    fn test_document_records_source() {
        let doc = Document::new("some text", "report.pdf");
        assert_eq!(doc.source(), Some("report.pdf"));
        assert_eq!(doc.text, "some text");
    }

    #[test]
    fn test_chunk_inherits_source() {
        let doc = Document::new("text", "notes.docx");
        let chunk = Chunk {
            text: "text".to_string(),
            chunk_index: 0,
            metadata: doc.metadata.clone(),
        };
        assert_eq!(chunk.source(), Some("notes.docx"));
    }

    #[test]
    fn test_chunk_config_default() {
        let config = ChunkConfig::default();
        assert_eq!(config.chunk_size, 1000);
        assert_eq!(config.overlap, 200);
    }

    #[test]
    fn test_chunk_serialization_round_trip() {
        let mut metadata = BTreeMap::new();
        metadata.insert(SOURCE_KEY.to_string(), "a.pdf".to_string());
        let chunk = Chunk {
            text: "chunk text".to_string(),
            chunk_index: 3,
            metadata,
        };

        let json = serde_json::to_string(&chunk).unwrap();
        let deserialized: Chunk = serde_json::from_str(&json).unwrap();
        assert_eq!(chunk, deserialized);
    }

    #[test]
    fn test_answer_serialization_shape() {
        let answer = Answer {
            answer: "Paris".to_string(),
            context: vec![Chunk {
                text: "The capital of France is Paris.".to_string(),
                chunk_index: 0,
                metadata: BTreeMap::new(),
            }],
        };

        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["answer"], "Paris");
        assert_eq!(json["context"][0]["text"], "The capital of France is Paris.");
    }
}
