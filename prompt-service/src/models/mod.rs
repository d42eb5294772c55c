pub mod chat;
pub mod feature;

pub use chat::{
    build_messages, system_instruction, ChatMessage, ChatRequest, ErrorResponse, PromptResponse,
    Role,
};
pub use feature::{Feature, UnknownFeature};
