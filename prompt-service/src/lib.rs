//! prompt-service: PromptPal prompt generation over the Groq completions API.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;

pub use startup::{AppState, Application};
