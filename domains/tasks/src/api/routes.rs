//! Route definitions for the Tasks domain API

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::tasks;
use super::middleware::TasksState;

/// Create all Tasks domain API routes
pub fn routes() -> Router<TasksState> {
    Router::new()
        .route("/api/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/api/tasks/{id}",
            put(tasks::update_task).delete(tasks::delete_task),
        )
}
