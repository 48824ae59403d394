//! # docqa-session
//!
//! Process-once, query-many orchestration:
//!
//! - [`DocumentPipeline`]: intake, load, chunk, embed, index
//! - [`Session`]: one processed document set, ready to answer questions
//! - [`SessionStore`]: concurrent registry keyed by generated session id

pub mod pipeline;
pub mod store;

pub use pipeline::{DocumentPipeline, Session};
pub use store::SessionStore;
