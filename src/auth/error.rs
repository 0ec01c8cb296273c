//! Error handling for the auth module

use crate::consts::messages;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("HTTP error with status {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Http {
        status: u16,
        message: Option<String>,
    },

    /// The success body was not valid JSON.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured endpoint is not an absolute http(s) URL.
    #[error("Invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

impl AuthError {
    /// Builds an [`AuthError::Http`] from a failed response, keeping the `message`
    /// field of a JSON body when the server sent one.
    pub async fn from_response(response: reqwest::Response) -> AuthError {
        let status = response.status().as_u16();
        let message = match response.text().await {
            Ok(body) => extract_message(&body),
            Err(_) => None,
        };

        AuthError::Http { status, message }
    }

    /// The text shown inline under the form for this failure.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            AuthError::Http { message: None, .. } => messages::LOGIN_FAILED.to_string(),
            _ => messages::UNEXPECTED_ERROR.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pulls a non-empty string `message` out of a JSON error body.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("message") {
        Some(serde_json::Value::String(message)) if !message.is_empty() => Some(message.clone()),
        _ => None,
    }
}
