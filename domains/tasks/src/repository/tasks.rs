//! Task repository

use crate::domain::entities::{Task, TaskPatch};
use clarity_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new task
    pub async fn create(&self, task: &Task) -> Result<Task> {
        let created = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (id, title, description, completed, due_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, completed, due_date, created_at
            "#,
        )
        .bind(task.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.completed)
        .bind(task.due_date)
        .bind(task.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// List tasks, newest first
    pub async fn list(&self, limit: i64) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, completed, due_date, created_at
            FROM tasks
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    /// Apply a validated merge-patch; fields absent from the patch keep
    /// their stored values. Returns None when the id does not exist.
    pub async fn update(&self, id: Uuid, patch: &TaskPatch) -> Result<Option<Task>> {
        let updated = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks SET
                title = CASE WHEN $2 THEN $3 ELSE title END,
                description = CASE WHEN $4 THEN $5 ELSE description END,
                completed = CASE WHEN $6 THEN $7 ELSE completed END,
                due_date = CASE WHEN $8 THEN $9 ELSE due_date END
            WHERE id = $1
            RETURNING id, title, description, completed, due_date, created_at
            "#,
        )
        .bind(id)
        .bind(patch.title.is_some())
        .bind(&patch.title)
        .bind(patch.description.is_some())
        .bind(patch.description.clone().flatten())
        .bind(patch.completed.is_some())
        .bind(patch.completed)
        .bind(patch.due_date.is_some())
        .bind(patch.due_date.flatten())
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete a task
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
