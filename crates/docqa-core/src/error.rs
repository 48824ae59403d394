//! Error types for docqa.

use thiserror::Error;

/// Main error type for docqa operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Intake produced no supported documents
    #[error("no valid files found")]
    NoValidFiles,

    /// Documents parsed but yielded no text to index
    #[error("documents contained no extractable text")]
    NoExtractableText,

    /// Document parsing failed
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// Chunking failed
    #[error("chunking error: {0}")]
    Chunking(#[from] ChunkError),

    /// Embedding generation failed
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbedError),

    /// Language model completion failed
    #[error("completion error: {0}")]
    Completion(#[from] CompletionError),

    /// Vector index operation failed
    #[error("index error: {0}")]
    Index(#[from] IndexError),

    /// Query against an unknown session id
    #[error("session not found: {0}")]
    SessionNotFound(String),

    /// Query against a session whose processing has not completed
    #[error("session not ready: {0}")]
    NotReady(String),

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Document loading errors.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("parse error in {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Chunking errors.
#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Embedding errors.
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("dimension mismatch: expected {expected}, got {got}")]
    Dimension { expected: usize, got: usize },
}

/// Language model completion errors.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("completion API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("completion response contained no choices")]
    EmptyResponse,
}

/// Vector index errors.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("count mismatch: {chunks} chunks, {embeddings} embeddings")]
    CountMismatch { chunks: usize, embeddings: usize },

    #[error("dimension mismatch: expected {expected}, got {got}")]
    Dimension { expected: usize, got: usize },

    #[error("cannot build an index from zero embeddings")]
    Empty,
}

/// Result type alias for docqa operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_valid_files_display() {
        assert_eq!(Error::NoValidFiles.to_string(), "no valid files found");
    }

    #[test]
    fn test_no_extractable_text_display() {
        assert_eq!(
            Error::NoExtractableText.to_string(),
            "documents contained no extractable text"
        );
    }

    #[test]
    fn test_load_error_parse_display() {
        let err = LoadError::Parse {
            source_name: "broken.pdf".to_string(),
            message: "truncated xref".to_string(),
        };
        assert_eq!(err.to_string(), "parse error in broken.pdf: truncated xref");
    }

    #[test]
    fn test_chunk_error_display() {
        let err = ChunkError::InvalidConfig("overlap must be < chunk_size".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: overlap must be < chunk_size"
        );
    }

    #[test]
    fn test_embed_error_dimension_display() {
        let err = EmbedError::Dimension {
            expected: 384,
            got: 768,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 384, got 768");
    }

    #[test]
    fn test_completion_error_api_display() {
        let err = CompletionError::Api {
            status: 401,
            message: "invalid api key".to_string(),
        };
        assert_eq!(err.to_string(), "completion API returned 401: invalid api key");
    }

    #[test]
    fn test_index_error_count_mismatch_display() {
        let err = IndexError::CountMismatch {
            chunks: 3,
            embeddings: 2,
        };
        assert_eq!(err.to_string(), "count mismatch: 3 chunks, 2 embeddings");
    }

    #[test]
    fn test_error_from_load_error() {
        let load_err = LoadError::Parse {
            source_name: "a.docx".to_string(),
            message: "missing document.xml".to_string(),
        };
        let err: Error = load_err.into();
        assert!(matches!(err, Error::Load(_)));
        assert!(err.to_string().contains("a.docx"));
    }

    #[test]
    fn test_error_from_embed_error() {
        let embed_err = EmbedError::Request("connection refused".to_string());
        let err: Error = embed_err.into();
        assert!(matches!(err, Error::Embedding(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_error_from_index_error() {
        let err: Error = IndexError::Empty.into();
        assert!(matches!(err, Error::Index(_)));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_session_errors_carry_id() {
        let err = Error::SessionNotFound("abc123".to_string());
        assert_eq!(err.to_string(), "session not found: abc123");

        let err = Error::NotReady("abc123".to_string());
        assert_eq!(err.to_string(), "session not ready: abc123");
    }

    #[test]
    fn test_result_type_alias() {
        fn ok_fn() -> Result<u32> {
            Ok(7)
        }
        fn err_fn() -> Result<u32> {
            Err(Error::NoValidFiles)
        }

        assert!(ok_fn().is_ok());
        assert!(err_fn().is_err());
    }
}
