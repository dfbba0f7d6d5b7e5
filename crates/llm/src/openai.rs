//! OpenAI-style chat-completion API client
//!
//! Calls a chat-completions endpoint (https://api.openai.com/v1/chat/completions
//! by default) using reqwest with bearer-token authorization.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{ChatCompletionService, ChatError, ChatMessage};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Fixed model identifier sent with every request
const MODEL: &str = "gpt-3.5-turbo";

const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 1000;

/// Bound on a single outbound completion call; there are no retries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Chat-completions request body
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
}

/// Chat-completions response body
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Configuration for [`OpenAiService`]
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    /// Override for tests and self-hosted gateways
    pub base_url: Option<String>,
}

/// Chat-completion service backed by an OpenAI-style API
pub struct OpenAiService {
    client: Client,
    config: OpenAiConfig,
    base_url: String,
}

impl OpenAiService {
    pub fn new(config: OpenAiConfig) -> Self {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            client: Client::new(),
            config,
            base_url,
        }
    }
}

#[async_trait::async_trait]
impl ChatCompletionService for OpenAiService {
    async fn complete(&self, history: &[ChatMessage]) -> Result<ChatMessage, ChatError> {
        let body = CompletionRequest {
            model: MODEL,
            messages: history,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let url = format!("{}/v1/chat/completions", self.base_url);

        tracing::debug!(model = MODEL, messages = history.len(), "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Request(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            // Quota exhaustion is reported in the error body, not the status
            if error_body.contains("quota") {
                return Err(ChatError::Quota);
            }

            return Err(ChatError::Api(format!(
                "API returned {}: {}",
                status, error_body
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Response(format!("Failed to parse response: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| ChatError::Response("response contained no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_request_wire_format() {
        let history = vec![ChatMessage::user("hello")];
        let body = CompletionRequest {
            model: MODEL,
            messages: &history,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["temperature"], 0.7);
        assert_eq!(json["max_tokens"], 1000);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_completion_response_parses_first_choice() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"hi"}}]}"#;
        let parsed: CompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "hi");
    }
}
