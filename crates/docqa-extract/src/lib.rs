//! # docqa-extract
//!
//! Upload intake and document loading for docqa.
//!
//! - [`extract_documents`]: filter an upload batch (including ZIP
//!   archives) down to supported PDF/DOCX blobs
//! - [`load_documents`]: parse blobs into text [`docqa_core::Document`]s
//!   via transient temp files
//!
//! Parsers are deliberately format-local modules ([`pdf`], [`docx`])
//! behind a single dispatch point in the loader.

pub mod docx;
pub mod intake;
pub mod loader;
pub mod pdf;

pub use intake::extract_documents;
pub use loader::load_documents;
