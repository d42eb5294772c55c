//! Prompt generation endpoint.
//!
//! A single linear pass: CORS preflight, method and content type checks,
//! body parsing, feature lookup, one provider call, response.

use crate::error::HandlerError;
use crate::models::{build_messages, ChatRequest, Feature, PromptResponse};
use crate::services::metrics;
use crate::services::providers::CompletionProvider;
use crate::startup::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{
        header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
        HeaderMap, HeaderValue, Method, StatusCode,
    },
    response::{IntoResponse, Response},
    Json,
};
use serde::de::Error as _;
use serde_json::Value;
use std::sync::Arc;

const JSON_CONTENT_TYPE: &str = "application/json";
const ALLOWED_ORIGIN: &str = "*";
const ALLOWED_METHODS: &str = "POST, OPTIONS";

/// Successful outcomes of [`PromptHandler::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    /// Answer to a CORS preflight.
    Preflight,
    /// Generated prompt text.
    Prompt(String),
}

fn cors_headers() -> [(axum::http::HeaderName, HeaderValue); 2] {
    [
        (
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOWED_ORIGIN),
        ),
        (
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ),
    ]
}

impl IntoResponse for PromptReply {
    fn into_response(self) -> Response {
        match self {
            PromptReply::Preflight => (StatusCode::OK, cors_headers()).into_response(),
            PromptReply::Prompt(prompt) => (
                StatusCode::OK,
                cors_headers(),
                Json(PromptResponse { prompt }),
            )
                .into_response(),
        }
    }
}

/// Turns inbound requests into provider calls.
#[derive(Clone)]
pub struct PromptHandler {
    provider: Arc<dyn CompletionProvider>,
}

impl PromptHandler {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(
        &self,
        method: &Method,
        headers: &HeaderMap,
        body: &[u8],
    ) -> Result<PromptReply, HandlerError> {
        if method == Method::OPTIONS {
            return Ok(PromptReply::Preflight);
        }

        if method != Method::POST || !is_json(headers) {
            return Err(HandlerError::MethodNotAllowed);
        }

        let body: Value = serde_json::from_slice(body)?;
        if body.is_null() {
            return Err(serde_json::Error::custom("request body is null").into());
        }
        let request = ChatRequest::from_value(&body);

        let feature = request
            .feature_name()
            .and_then(|name| name.parse::<Feature>().ok())
            .ok_or_else(|| HandlerError::InvalidFeature(request.feature_label()))?;

        let input = request
            .input_text()
            .ok_or_else(|| serde_json::Error::custom("`input` must be a string"))?;

        tracing::info!(
            feature = %feature,
            provider = %self.provider.name(),
            input_len = input.len(),
            "Generating prompt"
        );

        let messages = build_messages(feature, input);
        let result = self.provider.complete(&messages).await;

        metrics::record_generation(
            feature.metric_label(),
            self.provider.name(),
            if result.is_ok() { "success" } else { "error" },
        );

        Ok(PromptReply::Prompt(result?))
    }
}

/// The content type must be exactly `application/json`.
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes() == JSON_CONTENT_TYPE.as_bytes())
}

/// Axum entry point, mounted on `/api/chat` and as the router fallback.
pub async fn generate_prompt(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<PromptReply, HandlerError> {
    state.handler.handle(&method, &headers, &body).await
}
