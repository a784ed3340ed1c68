//! Completion provider port - interface for the external completion API.
//!
//! Abstracts the third-party inference service so the conversation service
//! can request completions without coupling to a specific vendor. One call
//! yields exactly one generated text; sampling parameters are fixed by the
//! adapter's configuration, not chosen per call.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for the external completion service.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a single non-streaming completion for the given messages.
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}

/// Request for one completion.
#[derive(Debug, Clone, Default)]
pub struct CompletionRequest {
    /// Conversation messages, in order.
    pub messages: Vec<Message>,
}

impl CompletionRequest {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A message in the completion payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }
}

/// Role of the message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instructions (guides model behavior).
    System,
    /// User input.
    User,
    /// Assistant (model) response.
    Assistant,
}

/// Completion provider errors.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by the provider.
    #[error("rate limited by provider: {0}")]
    RateLimited(String),

    /// Provider rejected the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider is unavailable (5xx).
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the provider response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl CompletionError {
    pub fn network(message: impl Into<String>) -> Self {
        CompletionError::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        CompletionError::Parse(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        CompletionError::Unavailable(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_preserves_message_order() {
        let request = CompletionRequest {
            messages: vec![Message::system("Be helpful"), Message::user("Hello")],
        };

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert_eq!(request.messages[1].content, "Hello");
    }

    #[test]
    fn message_constructors_set_roles() {
        assert_eq!(Message::system("x").role, MessageRole::System);
        assert_eq!(Message::user("x").role, MessageRole::User);
    }

    #[test]
    fn message_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MessageRole::System).unwrap(),
            "\"system\""
        );
        assert_eq!(
            serde_json::to_string(&MessageRole::User).unwrap(),
            "\"user\""
        );
    }

    #[test]
    fn errors_display_their_context() {
        assert_eq!(
            CompletionError::unavailable("server error 503").to_string(),
            "provider unavailable: server error 503"
        );
        assert_eq!(
            CompletionError::AuthenticationFailed.to_string(),
            "authentication failed"
        );
    }
}
