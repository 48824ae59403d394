//! # docqa-embed
//!
//! [`docqa_core::Embedder`] adapters:
//!
//! - [`HttpEmbedder`]: production adapter for OpenAI-compatible
//!   embeddings APIs
//! - [`HashEmbedder`]: deterministic offline adapter for tests and
//!   development

pub mod hash;
pub mod http;

pub use hash::HashEmbedder;
pub use http::HttpEmbedder;
