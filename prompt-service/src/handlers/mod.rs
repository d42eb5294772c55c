//! HTTP handlers for the prompt service.

pub mod health;
pub mod prompt;

pub use health::{health_check, metrics};
pub use prompt::{generate_prompt, PromptHandler, PromptReply};
