//! Completion provider abstraction.
//!
//! The handler talks to the language model through [`CompletionProvider`] so
//! the Groq backend can be swapped for the in-memory mock in tests.

pub mod groq;
pub mod mock;

use crate::models::ChatMessage;
use async_trait::async_trait;
use thiserror::Error;

pub use groq::GroqProvider;
pub use mock::MockCompletionProvider;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to fetch data from Groq API: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

/// A chat completion backend.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run one completion and return the text of the first choice.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError>;

    /// Provider name for logs and metrics.
    fn name(&self) -> &str;
}
