//! Mock chat-completion backend
//!
//! Deterministic stand-in for the external API: echoes the last message or
//! fails with a preset error. Used by resolver tests.

use crate::{ChatCompletionService, ChatError, ChatMessage};

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Echo,
    Quota,
    Api,
    Transport,
}

/// Mock chat-completion service for testing
#[derive(Debug, Clone)]
pub struct MockChatService {
    outcome: Outcome,
}

impl MockChatService {
    /// Echoes the last history entry as the assistant reply.
    pub fn new() -> Self {
        Self {
            outcome: Outcome::Echo,
        }
    }

    /// Always reports quota exhaustion.
    pub fn over_quota() -> Self {
        Self {
            outcome: Outcome::Quota,
        }
    }

    /// Always reports a non-quota API error.
    pub fn erroring() -> Self {
        Self {
            outcome: Outcome::Api,
        }
    }

    /// Always reports a transport failure.
    pub fn unreachable() -> Self {
        Self {
            outcome: Outcome::Transport,
        }
    }
}

impl Default for MockChatService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ChatCompletionService for MockChatService {
    async fn complete(&self, history: &[ChatMessage]) -> Result<ChatMessage, ChatError> {
        match self.outcome {
            Outcome::Echo => {
                let last = history
                    .last()
                    .map(|m| m.content.as_str())
                    .unwrap_or("empty");
                Ok(ChatMessage::assistant(format!("Mock reply to: {}", last)))
            }
            Outcome::Quota => Err(ChatError::Quota),
            Outcome::Api => Err(ChatError::Api("mock API error".to_string())),
            Outcome::Transport => Err(ChatError::Request("mock transport failure".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_echoes_last_message() {
        let service = MockChatService::new();
        let history = vec![ChatMessage::user("Hello, world!")];

        let reply = service.complete(&history).await.unwrap();
        assert_eq!(reply.content, "Mock reply to: Hello, world!");
    }

    #[tokio::test]
    async fn test_mock_failure_modes() {
        let history = vec![ChatMessage::user("x")];

        assert!(matches!(
            MockChatService::over_quota().complete(&history).await,
            Err(ChatError::Quota)
        ));
        assert!(matches!(
            MockChatService::erroring().complete(&history).await,
            Err(ChatError::Api(_))
        ));
        assert!(matches!(
            MockChatService::unreachable().complete(&history).await,
            Err(ChatError::Request(_))
        ));
    }
}
