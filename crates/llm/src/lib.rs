//! Reply resolution for Clarity
//!
//! This crate produces the assistant's reply to a conversation history.
//! When a chat-completion credential is configured, replies come from the
//! external API ([`OpenAiService`]); otherwise, and on every API failure,
//! the keyword classifier supplies a canned reply. The [`ReplyResolver`]
//! owns that decision and never fails outward.

pub mod classifier;
pub mod mock;
mod openai;
mod resolver;

pub use mock::MockChatService;
pub use openai::{OpenAiConfig, OpenAiService};
pub use resolver::ReplyResolver;

use serde::{Deserialize, Serialize};

/// Message role on the wire and in storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single conversation entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Chat-completion backend failures
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat completion quota exhausted")]
    Quota,

    #[error("chat completion API error: {0}")]
    Api(String),

    #[error("chat completion request failed: {0}")]
    Request(String),

    #[error("chat completion response invalid: {0}")]
    Response(String),
}

/// A backend that turns a conversation history into an assistant reply
#[async_trait::async_trait]
pub trait ChatCompletionService: Send + Sync {
    async fn complete(&self, history: &[ChatMessage]) -> Result<ChatMessage, ChatError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_role_serialization_lowercase() {
        let json = serde_json::to_string(&ChatRole::User).unwrap();
        assert_eq!(json, "\"user\"");

        let json = serde_json::to_string(&ChatRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }

    #[test]
    fn test_chat_message_serialization_roundtrip() {
        let msg = ChatMessage::user("hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hello"}"#);

        let deserialized: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, deserialized);
    }

    #[test]
    fn test_chat_message_constructors() {
        assert_eq!(ChatMessage::user("x").role, ChatRole::User);
        assert_eq!(ChatMessage::assistant("x").role, ChatRole::Assistant);
    }
}
