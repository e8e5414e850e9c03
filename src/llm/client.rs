use reqwest::{Client, RequestBuilder};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

use crate::config::LlmConfig;
use crate::error::{AppError, GenerationFailure};

/// OpenAI-compatible chat completion client. One call per summary, no retries.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: Client,
    api_key: String,
    model: String,
    chat_endpoint: String,
    temperature: f32,
    max_tokens: u32,
}

impl CompletionClient {
    pub fn new(config: &LlmConfig, timeout: Duration) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build completion client: {}", e)))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            chat_endpoint: config.chat_endpoint(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Returns the text of the first choice.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, GenerationFailure> {
        let response = self.request(system, user).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationFailure::Status(status));
        }

        let data: Value = response.json().await?;
        let content = data["choices"][0]["message"]["content"]
            .as_str()
            .map(str::trim)
            .unwrap_or_default();

        if content.is_empty() {
            debug!("empty completion: {}", data);
            return Err(GenerationFailure::EmptyResponse);
        }

        Ok(content.to_string())
    }

    fn request(&self, system: &str, user: &str) -> RequestBuilder {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });

        debug!("completion request to {} ({} chars of user content)", self.chat_endpoint, user.len());

        self.http
            .post(&self.chat_endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
    }
}
