//! Task management API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use clarity_common::{Error, Result, ValidatedJson};

use crate::api::middleware::TasksState;
use crate::domain::entities::{Task, TaskPatch};

/// Most tasks returned by the list endpoint
const MAX_LISTED: i64 = 100;

/// Request for creating a task
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

/// Create a new task
pub async fn create_task(
    State(state): State<TasksState>,
    ValidatedJson(req): ValidatedJson<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>)> {
    let task = Task::new(req.title, req.description, req.due_date)?;

    let created = state.repo.create(&task).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List tasks
pub async fn list_tasks(State(state): State<TasksState>) -> Result<Json<Vec<Task>>> {
    let tasks = state.repo.list(MAX_LISTED).await?;
    Ok(Json(tasks))
}

/// Apply a partial update to a task.
///
/// The body is an arbitrary field map validated against the allow-list of
/// mutable fields before the store is touched.
pub async fn update_task(
    State(state): State<TasksState>,
    Path(id): Path<Uuid>,
    Json(fields): Json<serde_json::Map<String, Value>>,
) -> Result<Json<Value>> {
    let patch = TaskPatch::from_map(&fields)?;

    state
        .repo
        .update(id, &patch)
        .await?
        .ok_or_else(|| Error::NotFound("Task not found".to_string()))?;

    Ok(Json(json!({ "message": "Task updated" })))
}

/// Delete a task
pub async fn delete_task(
    State(state): State<TasksState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>> {
    let deleted = state.repo.delete(id).await?;
    if !deleted {
        return Err(Error::NotFound("Task not found".to_string()));
    }

    Ok(Json(json!({ "message": "Task deleted" })))
}
