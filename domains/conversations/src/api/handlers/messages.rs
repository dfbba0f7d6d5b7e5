//! Message-exchange API handler

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use clarity_common::{Error, Result, ValidatedJson};
use clarity_llm::ChatMessage;

use crate::api::middleware::ConversationsState;

/// Request for sending a message
#[derive(Debug, Deserialize, Validate)]
pub struct AddMessageRequest {
    #[validate(length(min = 1))]
    pub message: String,
}

/// Response for a message exchange (the appended pair)
#[derive(Debug, Serialize)]
pub struct MessageExchangeResponse {
    pub user_message: ChatMessage,
    pub ai_message: ChatMessage,
}

/// Append a user message to a conversation and get the assistant reply.
///
/// Reads the stored message list, appends the user message, resolves the
/// reply against the updated history, appends it, and persists list and
/// `updated_at` in one write.
pub async fn send_message(
    State(state): State<ConversationsState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<AddMessageRequest>,
) -> Result<Json<MessageExchangeResponse>> {
    let mut conversation = state
        .repo
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Conversation not found".to_string()))?;

    let user_message = ChatMessage::user(req.message);
    conversation.append(user_message.clone());

    // The resolver sees the history including the new user message
    let ai_message = state.resolver.resolve(&conversation.messages).await;
    conversation.append(ai_message.clone());

    state.repo.save_messages(&conversation).await?;

    Ok(Json(MessageExchangeResponse {
        user_message,
        ai_message,
    }))
}
