//! Domain entities for the Conversations domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

use clarity_common::{Error, Result};
use clarity_llm::ChatMessage;

/// Maximum title string length (varchar(200))
const MAX_TITLE_LENGTH: usize = 200;

/// Conversation entity
///
/// The message list is stored embedded in the row as a single JSONB value;
/// the exchange workflow reads it, appends, and writes it back whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Conversation {
    pub id: Uuid,
    pub title: String,
    pub messages: Json<Vec<ChatMessage>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a new conversation with an empty message list
    pub fn new(title: String) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(Error::Validation("Title is required".to_string()));
        }
        if title.len() > MAX_TITLE_LENGTH {
            return Err(Error::Validation(format!(
                "Title must be at most {} characters",
                MAX_TITLE_LENGTH
            )));
        }

        let now = Utc::now();
        Ok(Conversation {
            id: Uuid::new_v4(),
            title,
            messages: Json(Vec::new()),
            created_at: now,
            updated_at: now,
        })
    }

    /// Append a message to the list and refresh `updated_at`.
    ///
    /// The list is append-only during normal operation; order is
    /// significant (the last entry feeds reply resolution).
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.updated_at = Utc::now();
    }
}
