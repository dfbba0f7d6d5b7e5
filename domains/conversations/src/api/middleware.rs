//! Conversations domain state

use clarity_llm::ReplyResolver;

use crate::repository::ConversationRepository;

/// Application state for the Conversations domain
#[derive(Clone)]
pub struct ConversationsState {
    pub repo: ConversationRepository,
    pub resolver: ReplyResolver,
}
