//! # docqa-index
//!
//! [`docqa_core::VectorIndex`] implementations. The base design ships a
//! single in-memory backend, [`MemoryIndex`], built once per processed
//! document set and queried for the lifetime of its session.

pub mod memory;

pub use memory::MemoryIndex;
