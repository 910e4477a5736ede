use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Gateway-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, GatewayError>`.
///
/// The `Display` text is diagnostic and only ever logged by the handler;
/// callers receive `user_message()` in a `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Model call exceeded the {0}ms deadline")]
    UpstreamTimeout(u128),

    #[error("Model overloaded (status {status}): {message}")]
    UpstreamOverloaded { status: u16, message: String },

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("Model response violated the output schema: {0}")]
    InvalidResponse(String),

    #[error("Model call failed: {0}")]
    Upstream(LlmError),
}

impl From<LlmError> for GatewayError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Overloaded { status, message } => {
                GatewayError::UpstreamOverloaded { status, message }
            }
            LlmError::EmptyContent => GatewayError::EmptyResponse,
            other => GatewayError::Upstream(other),
        }
    }
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidAction(_) | GatewayError::MalformedRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::UpstreamOverloaded { .. } => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::Configuration(_)
            | GatewayError::EmptyResponse
            | GatewayError::InvalidResponse(_)
            | GatewayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short message safe to show to an end user.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::InvalidAction(_) => "Invalid action".to_string(),
            GatewayError::MalformedRequest(msg) => format!("Malformed request: {msg}"),
            GatewayError::Configuration(_) => "Server configuration error".to_string(),
            GatewayError::UpstreamTimeout(_) => {
                "The AI service took too long to respond. Please try again.".to_string()
            }
            GatewayError::UpstreamOverloaded { .. } => {
                "The AI service is busy right now. Please try again shortly.".to_string()
            }
            GatewayError::EmptyResponse => {
                "The AI service returned an empty response.".to_string()
            }
            GatewayError::InvalidResponse(_) => {
                "The AI service returned an unexpected response.".to_string()
            }
            GatewayError::Upstream(_) => {
                "Failed to generate a response. Please try again.".to_string()
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.user_message() }));
        (self.status(), body).into_response()
    }
}
