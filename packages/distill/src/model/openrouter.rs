//! OpenRouter backend (OpenAI-compatible chat completions).
//!
//! The secondary backend: cheaper and with a broader model catalog than
//! the primary. Structured output is requested through the
//! `json_schema` response format.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::SecretString;
use crate::error::{DistillError, Result};
use crate::traits::model::StructuredModel;

const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
const OPENROUTER_MODEL: &str = "openai/gpt-4o-mini";

/// Timeout on model calls. The upstream service has no streaming here,
/// so a hung connection would otherwise block the run forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenRouter-backed structured model.
pub struct OpenRouter {
    client: Client,
    api_key: SecretString,
    model: String,
    base_url: String,
    id: String,
}

impl OpenRouter {
    pub fn new(api_key: SecretString) -> Self {
        let model = OPENROUTER_MODEL.to_string();
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key,
            id: format!("openrouter/{model}"),
            model,
            base_url: OPENROUTER_BASE_URL.to_string(),
        }
    }

    /// Override the model slug (default: `openai/gpt-4o-mini`).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self.id = format!("openrouter/{}", self.model);
        self
    }

    /// Override the base URL (proxies, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn chat_request(&self, system: &str, user: &str, schema: serde_json::Value) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user.to_string(),
                },
            ],
            temperature: 0.0,
            response_format: ResponseFormat {
                format_type: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: "structured_response",
                    // Strict mode requires every property in `required` and
                    // `additionalProperties: false` throughout; the schemas
                    // mark defaulted fields optional, so the reply is
                    // validated on parse instead.
                    strict: false,
                    schema,
                },
            },
        }
    }
}

#[async_trait]
impl StructuredModel for OpenRouter {
    async fn generate_structured(
        &self,
        system: &str,
        user: &str,
        schema: serde_json::Value,
    ) -> Result<String> {
        let request = self.chat_request(system, user, schema);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .json(&request)
            .send()
            .await
            .map_err(|e| DistillError::extraction(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DistillError::extraction(format!(
                "OpenRouter {status}: {body}"
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DistillError::extraction(e.to_string()))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| DistillError::extraction("OpenRouter returned no choices"))
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Serialize)]
struct JsonSchemaFormat {
    name: &'static str,
    strict: bool,
    schema: serde_json::Value,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_id() {
        let backend = OpenRouter::new("sk-or-test".into()).with_model("mistralai/mixtral");
        assert_eq!(backend.id(), "openrouter/mistralai/mixtral");
    }

    #[test]
    fn test_default_model() {
        let backend = OpenRouter::new("sk-or-test".into());
        assert_eq!(backend.model, OPENROUTER_MODEL);
        assert_eq!(backend.base_url, OPENROUTER_BASE_URL);
    }

    #[test]
    fn test_request_shape_is_not_strict() {
        // Schemas leave serde-defaulted fields out of `required`, which
        // the provider's strict mode rejects up front with a 400.
        let backend = OpenRouter::new("sk-or-test".into());
        let request = backend.chat_request(
            "sys",
            "user",
            serde_json::json!({"type": "object", "properties": {}}),
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["response_format"]["type"], "json_schema");
        assert_eq!(value["response_format"]["json_schema"]["strict"], false);
        assert_eq!(value["temperature"], 0.0);
    }
}
