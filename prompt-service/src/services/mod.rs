pub mod metrics;
pub mod providers;

pub use providers::{CompletionProvider, GroqProvider, MockCompletionProvider, ProviderError};
