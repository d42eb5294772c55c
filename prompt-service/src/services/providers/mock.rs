//! In-memory provider for tests and offline runs.

use super::{CompletionProvider, ProviderError};
use crate::models::ChatMessage;
use async_trait::async_trait;
use std::sync::Mutex;

enum Reply {
    Text(String),
    Status(u16, String),
    Malformed,
}

/// Provider that returns a canned reply and records every call.
pub struct MockCompletionProvider {
    reply: Reply,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockCompletionProvider {
    /// Always answers with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(Reply::Text(text.into()))
    }

    /// Always fails as if the API returned `status`.
    pub fn failing(status: u16, reason: impl Into<String>) -> Self {
        Self::with_reply(Reply::Status(status, reason.into()))
    }

    /// Always fails as if the API returned an unreadable payload.
    pub fn malformed() -> Self {
        Self::with_reply(Reply::Malformed)
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Messages received so far, one entry per call.
    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(messages.to_vec());
        }

        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Status(status, reason) => Err(ProviderError::Status {
                status: *status,
                reason: reason.clone(),
            }),
            Reply::Malformed => Err(ProviderError::MalformedResponse(
                "mock payload has no choices".to_string(),
            )),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
