//! Environment-based configuration.
//!
//! Secrets and model names come from the environment (or a `.env` file
//! loaded by the binary); everything else is a CLI flag.

use anyhow::{Context, Result};

/// Default language model served by Groq.
pub const DEFAULT_LLM_MODEL: &str = "mixtral-8x7b-32768";

/// Default embedding model name.
pub const DEFAULT_EMBEDDING_MODEL: &str = "all-MiniLM-L6-v2";

/// Default embedding dimension (matches `all-MiniLM-L6-v2`).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Runtime configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key (`GROQ_API_KEY`, required)
    pub groq_api_key: String,

    /// Chat model name (`LLM_MODEL_NAME`)
    pub llm_model: String,

    /// Embedding model name (`EMBEDDING_MODEL_NAME`)
    pub embedding_model: String,

    /// Embedding dimension (`EMBEDDING_DIM`)
    pub embedding_dim: usize,

    /// Embeddings API endpoint (`EMBEDDING_API_URL`); when unset the
    /// offline hash embedder is used instead
    pub embedding_api_url: Option<String>,

    /// Embeddings API key (`EMBEDDING_API_KEY`)
    pub embedding_api_key: String,
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let groq_api_key = std::env::var("GROQ_API_KEY")
            .context("GROQ_API_KEY is not set (put it in the environment or a .env file)")?;

        let embedding_dim = match std::env::var("EMBEDDING_DIM") {
            Ok(value) => value
                .parse()
                .context("EMBEDDING_DIM must be a positive integer")?,
            Err(_) => DEFAULT_EMBEDDING_DIM,
        };

        Ok(Self {
            groq_api_key,
            llm_model: std::env::var("LLM_MODEL_NAME")
                .unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            embedding_model: std::env::var("EMBEDDING_MODEL_NAME")
                .unwrap_or_else(|_| DEFAULT_EMBEDDING_MODEL.to_string()),
            embedding_dim,
            embedding_api_url: std::env::var("EMBEDDING_API_URL").ok(),
            embedding_api_key: std::env::var("EMBEDDING_API_KEY").unwrap_or_default(),
        })
    }
}
