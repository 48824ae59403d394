//! # docqa-core
//!
//! Core types and traits for the docqa document question-answering pipeline.
//!
//! ## Architecture
//!
//! The crate is organized around a pipeline pattern:
//!
//! ```text
//! RawFile → intake → ExtractedBlob → loader → Document
//!         → chunker → Chunk → Embedder → VectorIndex
//!                                            ↓
//!                        question → search → Answer
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RawFile`] | An uploaded file as received from the caller |
//! | [`ExtractedBlob`] | Bytes of a single supported document |
//! | [`Document`] | Parsed text plus source metadata |
//! | [`Chunk`] | A bounded span of document text |
//! | [`ScoredChunk`] | A chunk with its similarity score |
//! | [`Answer`] | Model response plus retrieved context |
//!
//! ## Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Embedder`] | Map text to fixed-dimension vectors |
//! | [`Completer`] | Produce a completion for a prompt |
//! | [`VectorIndex`] | k-NN similarity search over embedded chunks |
//!
//! ## Related Crates
//!
//! - `docqa-extract`: upload intake and document loaders
//! - `docqa-chunker`: deterministic character chunking
//! - `docqa-embed`: embedding adapters
//! - `docqa-index`: in-memory vector index
//! - `docqa-answer`: completion adapters and answer synthesis
//! - `docqa-session`: session store and end-to-end pipeline

pub mod error;
pub mod traits;
pub mod types;

pub use error::{
    ChunkError, CompletionError, EmbedError, Error, IndexError, LoadError, Result,
};
pub use traits::*;
pub use types::*;
