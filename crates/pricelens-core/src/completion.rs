//! Text-in, text-out language model capability.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Why a completion produced no text.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Completion unavailable: {0}")]
    Unavailable(String),

    #[error("Completion timed out after {0:?}")]
    Timeout(Duration),
}

impl CompletionError {
    /// Create an unavailable error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// A vendor-agnostic completion backend.
#[async_trait]
pub trait Completion: Send + Sync {
    /// Send one prompt and return the model's reply.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    /// Short backend name for logs.
    fn name(&self) -> &str {
        "completion"
    }
}
