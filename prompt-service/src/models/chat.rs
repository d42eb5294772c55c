//! Request, response and message types for prompt generation.

use super::Feature;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields of an inbound request body.
///
/// Only a JSON object has fields; arrays, strings, numbers and booleans yield
/// neither `feature` nor `input`. Values are kept untyped so the feature can
/// be validated before anything is required of `input`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatRequest {
    pub feature: Option<Value>,
    pub input: Option<Value>,
}

impl ChatRequest {
    pub fn from_value(body: &Value) -> Self {
        match body.as_object() {
            Some(fields) => Self {
                feature: fields.get("feature").cloned(),
                input: fields.get("input").cloned(),
            },
            None => Self::default(),
        }
    }

    /// The feature name, if one was sent as a string.
    pub fn feature_name(&self) -> Option<&str> {
        self.feature.as_ref().and_then(Value::as_str)
    }

    /// The feature as sent, for logs.
    pub fn feature_label(&self) -> Option<String> {
        self.feature.as_ref().map(|value| match value {
            Value::String(name) => name.clone(),
            other => other.to_string(),
        })
    }

    /// The user input, if one was sent as a string.
    pub fn input_text(&self) -> Option<&str> {
        self.input.as_ref().and_then(Value::as_str)
    }
}

/// Successful response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptResponse {
    pub prompt: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A role-tagged message sent to the completion provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Build the system instruction for a feature.
pub fn system_instruction(feature: Feature) -> String {
    format!(
        "You are an AI assistant for PromptPal, a tool that generates detailed prompts for \
         Midjourney/DALL-E. Your goal is to assist artists, designers, and writers in sparking \
         new ideas and exploring their creativity. You will receive a {}. Respond with a unique \
         and often surprising prompt that can be shared with the community.",
        feature.description()
    )
}

/// The system/user message pair for one generation.
pub fn build_messages(feature: Feature, input: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_instruction(feature)),
        ChatMessage::user(input),
    ]
}
