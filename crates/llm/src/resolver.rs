//! Reply resolver
//!
//! Turns a conversation history into an assistant reply. With no backend
//! configured every reply comes from the keyword classifier; with one, API
//! failures are absorbed and degraded into a best-effort canned reply. The
//! caller never sees an error from this component.

use std::sync::Arc;

use crate::classifier::classify;
use crate::{ChatCompletionService, ChatError, ChatMessage, ChatRole};

/// Prefix when the backend reports quota exhaustion
const QUOTA_NOTICE: &str =
    "I'm sorry, but there's an API quota limitation. Using simplified responses instead.\n\n";

/// Prefix when the backend call fails in transport or parsing
const ERROR_NOTICE: &str =
    "I encountered an error while processing your request. Using simplified responses instead.\n\n";

/// Reply for non-quota API errors; no classifier fallback here
const CONNECTIVITY_REPLY: &str =
    "I'm having trouble connecting to my brain. Please try again later.";

/// Resolves assistant replies, falling back to canned responses.
#[derive(Clone)]
pub struct ReplyResolver {
    backend: Option<Arc<dyn ChatCompletionService>>,
}

impl ReplyResolver {
    pub fn new(backend: Option<Arc<dyn ChatCompletionService>>) -> Self {
        Self { backend }
    }

    /// Resolver with no backend; every reply comes from the classifier.
    pub fn fallback_only() -> Self {
        Self::new(None)
    }

    /// Produce the assistant reply for a conversation history.
    ///
    /// Infallible: every backend failure is converted into a degraded but
    /// valid assistant message.
    pub async fn resolve(&self, history: &[ChatMessage]) -> ChatMessage {
        let Some(backend) = &self.backend else {
            tracing::warn!("No chat completion credential configured, using canned reply");
            return ChatMessage::assistant(classify(last_user_content(history)));
        };

        match backend.complete(history).await {
            Ok(reply) => reply,
            Err(ChatError::Quota) => {
                tracing::error!("Chat completion quota exhausted, using canned reply");
                let canned = classify(last_user_content(history));
                ChatMessage::assistant(format!("{}{}", QUOTA_NOTICE, canned))
            }
            Err(ChatError::Api(message)) => {
                tracing::error!(error = %message, "Chat completion API error");
                ChatMessage::assistant(CONNECTIVITY_REPLY)
            }
            Err(err) => {
                tracing::error!(error = %err, "Chat completion call failed, using canned reply");
                let canned = classify(last_user_content(history));
                ChatMessage::assistant(format!("{}{}", ERROR_NOTICE, canned))
            }
        }
    }
}

/// Content of the final history entry when it is a user message, else "".
fn last_user_content(history: &[ChatMessage]) -> &str {
    match history.last() {
        Some(message) if message.role == ChatRole::User => &message.content,
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{CLARIFICATION_REPLY, GREETING_REPLY, OVERWHELM_REPLY};
    use crate::mock::MockChatService;

    #[tokio::test]
    async fn test_no_backend_resolves_from_classifier() {
        let resolver = ReplyResolver::fallback_only();
        let history = vec![ChatMessage::user("I feel overwhelmed")];

        let reply = resolver.resolve(&history).await;

        assert_eq!(reply.role, ChatRole::Assistant);
        assert_eq!(reply.content, OVERWHELM_REPLY);
    }

    #[tokio::test]
    async fn test_no_backend_ignores_trailing_assistant_entry() {
        let resolver = ReplyResolver::fallback_only();
        let history = vec![
            ChatMessage::user("hello"),
            ChatMessage::assistant("Hi!"),
        ];

        // Last entry is not a user message, so classification runs on ""
        let reply = resolver.resolve(&history).await;
        assert_eq!(reply.content, CLARIFICATION_REPLY);
    }

    #[tokio::test]
    async fn test_no_backend_empty_history() {
        let resolver = ReplyResolver::fallback_only();
        let reply = resolver.resolve(&[]).await;
        assert_eq!(reply.content, CLARIFICATION_REPLY);
    }

    #[tokio::test]
    async fn test_success_returns_backend_reply_verbatim() {
        let resolver = ReplyResolver::new(Some(Arc::new(MockChatService::new())));
        let history = vec![ChatMessage::user("hello")];

        let reply = resolver.resolve(&history).await;

        assert_eq!(reply.role, ChatRole::Assistant);
        assert_eq!(reply.content, "Mock reply to: hello");
    }

    #[tokio::test]
    async fn test_quota_error_composes_apology_and_canned_reply() {
        let resolver = ReplyResolver::new(Some(Arc::new(MockChatService::over_quota())));
        let history = vec![ChatMessage::user("hello")];

        let reply = resolver.resolve(&history).await;

        assert!(reply.content.starts_with(QUOTA_NOTICE));
        assert!(reply.content.ends_with(GREETING_REPLY));
    }

    #[tokio::test]
    async fn test_api_error_returns_connectivity_reply_without_fallback() {
        let resolver = ReplyResolver::new(Some(Arc::new(MockChatService::erroring())));
        let history = vec![ChatMessage::user("hello")];

        let reply = resolver.resolve(&history).await;

        assert_eq!(reply.content, CONNECTIVITY_REPLY);
    }

    #[tokio::test]
    async fn test_transport_error_composes_notice_and_canned_reply() {
        let resolver = ReplyResolver::new(Some(Arc::new(MockChatService::unreachable())));
        let history = vec![ChatMessage::user("I feel overwhelmed")];

        let reply = resolver.resolve(&history).await;

        assert!(reply.content.starts_with(ERROR_NOTICE));
        assert!(reply.content.ends_with(OVERWHELM_REPLY));
    }
}
