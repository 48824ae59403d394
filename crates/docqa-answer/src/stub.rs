//! Offline completer for tests and development.

use async_trait::async_trait;
use docqa_core::{Completer, CompletionError};

/// [`Completer`] that returns a fixed string for every prompt.
pub struct StaticCompleter {
    response: String,
}

impl StaticCompleter {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl Default for StaticCompleter {
    fn default() -> Self {
        Self::new("static completion")
    }
}

#[async_trait]
impl Completer for StaticCompleter {
    fn model_name(&self) -> &str {
        "static"
    }

    async fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
        Ok(self.response.clone())
    }
}
