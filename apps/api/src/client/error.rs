use std::time::Duration;

use thiserror::Error;

/// The single normalized failure surfaced to callers of the adapter.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Gateway error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Request timed out after {}s", .0.as_secs_f32())]
    Timeout(Duration),

    #[error("Unexpected response from gateway: {0}")]
    Decode(String),
}

impl ClientError {
    /// One human-readable message per failed call.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Transport(_) => {
                "Could not reach the career service. Check your connection and try again."
                    .to_string()
            }
            ClientError::Upstream { message, .. } => message.clone(),
            ClientError::Timeout(_) => {
                "The request took too long. Please try again shortly.".to_string()
            }
            ClientError::Decode(_) => {
                "The career service sent an unexpected response.".to_string()
            }
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Timeout(_))
    }

    /// The gateway answered but the call still failed: an error status, or a
    /// success body that does not match the expected shape.
    pub fn is_upstream(&self) -> bool {
        matches!(self, ClientError::Upstream { .. } | ClientError::Decode(_))
    }

    /// Whether a user-initiated retry is likely to help.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Transport(_) | ClientError::Timeout(_) => true,
            ClientError::Upstream { status, .. } => matches!(status, 503 | 504),
            ClientError::Decode(_) => false,
        }
    }
}
