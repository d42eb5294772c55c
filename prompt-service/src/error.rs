use crate::models::ErrorResponse;
use crate::services::providers::ProviderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Only POST requests with JSON body are allowed";
pub const INVALID_FEATURE_MESSAGE: &str = "Invalid feature";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Method or content type not allowed")]
    MethodNotAllowed,

    #[error("Invalid feature: {0:?}")]
    InvalidFeature(Option<String>),

    #[error("Failed to parse request body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Cause of a failed request, independent of the wire response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Parse,
    Provider,
    Unknown,
}

impl HandlerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HandlerError::MethodNotAllowed | HandlerError::InvalidFeature(_) => {
                ErrorKind::Validation
            }
            HandlerError::Parse(_) => ErrorKind::Parse,
            HandlerError::Provider(_) => ErrorKind::Provider,
            HandlerError::Internal(_) => ErrorKind::Unknown,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            HandlerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            HandlerError::InvalidFeature(_) => StatusCode::BAD_REQUEST,
            HandlerError::Parse(_) | HandlerError::Provider(_) | HandlerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message written to the caller. Internal failures never leak detail.
    pub fn public_message(&self) -> &'static str {
        match self {
            HandlerError::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE,
            HandlerError::InvalidFeature(_) => INVALID_FEATURE_MESSAGE,
            _ => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        if self.kind() != ErrorKind::Validation {
            tracing::error!(error = %self, kind = ?self.kind(), "Prompt request failed");
        }

        (
            self.status(),
            Json(ErrorResponse {
                error: self.public_message().to_string(),
            }),
        )
            .into_response()
    }
}
