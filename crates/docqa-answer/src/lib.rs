//! # docqa-answer
//!
//! Question answering over an indexed document set:
//!
//! - [`Answerer`]: embed the question, retrieve top-k chunks, synthesize
//!   a grounded answer
//! - [`GroqCompleter`]: production [`docqa_core::Completer`] for the Groq
//!   chat-completions API
//! - [`StaticCompleter`]: offline completer for tests

pub mod answerer;
pub mod groq;
pub mod stub;

pub use answerer::{Answerer, DEFAULT_TOP_K};
pub use groq::GroqCompleter;
pub use stub::StaticCompleter;
