//! Gemini backend (Google's multimodal foundation model).
//!
//! The primary backend, used when no secondary-backend credential
//! resolves. Structured output is requested through `responseSchema`
//! with a JSON response MIME type.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::SecretString;
use crate::error::{DistillError, Result};
use crate::traits::model::StructuredModel;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-1.5-flash";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Gemini-backed structured model.
pub struct Gemini {
    client: Client,
    api_key: SecretString,
    model: String,
    base_url: String,
    id: String,
}

impl Gemini {
    pub fn new(api_key: SecretString) -> Self {
        let model = GEMINI_MODEL.to_string();
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key,
            id: format!("gemini/{model}"),
            model,
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    /// Override the model (default: `gemini-1.5-flash`).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self.id = format!("gemini/{}", self.model);
        self
    }

    /// Override the base URL (tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Gemini's `responseSchema` is an OpenAPI-style subset; the draft-07
/// keywords schemars emits at the top level are rejected.
fn sanitize_schema(mut schema: serde_json::Value) -> serde_json::Value {
    if let Some(object) = schema.as_object_mut() {
        object.remove("$schema");
        object.remove("title");
        object.remove("definitions");
    }
    schema
}

#[async_trait]
impl StructuredModel for Gemini {
    async fn generate_structured(
        &self,
        system: &str,
        user: &str,
        schema: serde_json::Value,
    ) -> Result<String> {
        let request = GenerateRequest {
            system_instruction: ContentPayload {
                parts: vec![Part {
                    text: system.to_string(),
                }],
            },
            contents: vec![ContentPayload {
                parts: vec![Part {
                    text: user.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.0,
                response_mime_type: "application/json",
                response_schema: sanitize_schema(schema),
            },
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            self.api_key.expose()
        );

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| DistillError::extraction(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DistillError::extraction(format!("Gemini {status}: {body}")));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| DistillError::extraction(e.to_string()))?;

        generated
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| DistillError::extraction("Gemini returned no candidates"))
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: ContentPayload,
    contents: Vec<ContentPayload>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct ContentPayload {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<Part>,
}
