//! HTTP API assembly for Clarity

use std::sync::Arc;

use axum::{Json, Router};
use serde_json::json;
use sqlx::PgPool;

use clarity_common::Config;
use clarity_conversations::{ConversationRepository, ConversationsState};
use clarity_llm::{ChatCompletionService, OpenAiConfig, OpenAiService, ReplyResolver};
use clarity_tasks::{TaskRepository, TasksState};

/// Create the main application router with all routes
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    // Absence of the credential is a supported configuration: the reply
    // resolver answers from canned responses only.
    let backend: Option<Arc<dyn ChatCompletionService>> =
        config.openai_api_key.as_ref().map(|api_key| {
            Arc::new(OpenAiService::new(OpenAiConfig {
                api_key: api_key.clone(),
                base_url: config.openai_base_url.clone(),
            })) as Arc<dyn ChatCompletionService>
        });

    if backend.is_none() {
        tracing::warn!("OPENAI_API_KEY not set, running in fallback mode");
    }

    let conversations_state = ConversationsState {
        repo: ConversationRepository::new(pool.clone()),
        resolver: ReplyResolver::new(backend),
    };
    let tasks_state = TasksState {
        repo: TaskRepository::new(pool),
    };

    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/api", axum::routing::get(root))
        .merge(clarity_conversations::routes().with_state(conversations_state))
        .merge(clarity_tasks::routes().with_state(tasks_state));

    Ok(app)
}

/// Liveness endpoint
async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Clarity assistant API is running" }))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
