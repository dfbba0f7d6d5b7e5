//! Conversation repository

use crate::domain::entities::Conversation;
use clarity_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ConversationRepository {
    pool: PgPool,
}

impl ConversationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find conversation by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Conversation>> {
        let conv = sqlx::query_as::<_, Conversation>(
            r#"
            SELECT id, title, messages, created_at, updated_at
            FROM conversations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(conv)
    }

    /// List conversations, most recently updated first
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Conversation>> {
        let convs = sqlx::query_as::<_, Conversation>(
            r#"
            SELECT id, title, messages, created_at, updated_at
            FROM conversations
            ORDER BY updated_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(convs)
    }

    /// Create a new conversation
    pub async fn create(&self, conv: &Conversation) -> Result<Conversation> {
        let created = sqlx::query_as::<_, Conversation>(
            r#"
            INSERT INTO conversations (id, title, messages, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, messages, created_at, updated_at
            "#,
        )
        .bind(conv.id)
        .bind(&conv.title)
        .bind(&conv.messages)
        .bind(conv.created_at)
        .bind(conv.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Persist the full message list and refreshed `updated_at` as a
    /// single update.
    ///
    /// The surrounding read-append-write sequence is not atomic: concurrent
    /// exchanges on the same conversation race, last write wins.
    pub async fn save_messages(&self, conv: &Conversation) -> Result<()> {
        sqlx::query("UPDATE conversations SET messages = $2, updated_at = $3 WHERE id = $1")
            .bind(conv.id)
            .bind(&conv.messages)
            .bind(conv.updated_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Delete a conversation
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM conversations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
