//! # docqa-chunker
//!
//! Splits loaded documents into fixed-size, overlapping chunks. The
//! splitter prefers paragraph and sentence boundaries near the size
//! limit so chunks stay readable, and it is deterministic: the same
//! documents always yield the same chunk sequence.

pub mod fixed;

pub use fixed::{split_documents, split_text};
