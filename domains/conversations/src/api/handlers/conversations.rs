//! Conversation management API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use clarity_common::{Error, Result, ValidatedJson};

use crate::api::middleware::ConversationsState;
use crate::domain::entities::Conversation;

/// Most conversations returned by the list endpoint
const MAX_LISTED: i64 = 100;

/// Request for creating a conversation
#[derive(Debug, Deserialize, Validate)]
pub struct CreateConversationRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
}

/// Create a new conversation
pub async fn create_conversation(
    State(state): State<ConversationsState>,
    ValidatedJson(req): ValidatedJson<CreateConversationRequest>,
) -> Result<(StatusCode, Json<Conversation>)> {
    let conversation = Conversation::new(req.title)?;

    let created = state.repo.create(&conversation).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List conversations, most recently updated first
pub async fn list_conversations(
    State(state): State<ConversationsState>,
) -> Result<Json<Vec<Conversation>>> {
    let conversations = state.repo.list_recent(MAX_LISTED).await?;
    Ok(Json(conversations))
}

/// Get a single conversation by ID
pub async fn get_conversation(
    State(state): State<ConversationsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Conversation>> {
    let conversation = state
        .repo
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Conversation not found".to_string()))?;

    Ok(Json(conversation))
}

/// Delete a conversation
pub async fn delete_conversation(
    State(state): State<ConversationsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let deleted = state.repo.delete(id).await?;
    if !deleted {
        return Err(Error::NotFound("Conversation not found".to_string()));
    }

    Ok(Json(json!({ "message": "Conversation deleted" })))
}
