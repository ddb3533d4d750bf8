//! Task Store Errors
//!
//! Failure kinds surfaced by the task API client.

use serde::Deserialize;
use thiserror::Error;

/// Fallback text when the server gives nothing presentable
pub const GENERIC_ERROR_MESSAGE: &str = "Error! Something went wrong!";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Credential missing, expired or rejected (401/403)
    #[error("unauthorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },
    /// Any other non-success response
    #[error("request failed ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },
    /// No response at all
    #[error("network error: {0}")]
    Network(String),
    /// Response body did not match the expected shape
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Error body produced by the API's error middleware
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl StoreError {
    /// Classify a non-success response from its status and raw body
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        match status {
            401 | 403 => StoreError::Unauthorized {
                status,
                message: message.unwrap_or_default(),
            },
            _ => StoreError::Server { status, message },
        }
    }

    /// Whether the session should be treated as expired
    pub fn is_authorization(&self) -> bool {
        matches!(self, StoreError::Unauthorized { .. })
    }

    /// Text for the error toast
    ///
    /// Server-provided messages are shown as-is except for 500s, which
    /// (like transport and decode failures) get the generic text.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Unauthorized { message, .. } if !message.is_empty() => message.clone(),
            StoreError::Server {
                status,
                message: Some(message),
            } if *status != 500 => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}
