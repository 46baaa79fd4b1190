//! Mock implementations for testing.
//!
//! Deterministic, configurable stand-ins for the model backend, the
//! publishing sink, and transcript sources, so pipeline logic can be
//! tested without network calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{DistillError, Result};
use crate::traits::{
    model::StructuredModel, publisher::Publisher, transcript::Transcript,
    transcript::TranscriptSource,
};
use crate::types::bundle::ResultBundle;

/// A scripted model backend.
///
/// Replies are keyed by the schema's type name (the `title` field
/// schemars puts on generated schemas): `"TaskList"`, `"MeetingSummary"`,
/// `"VideoInsights"`. Unknown schemas get a minimal conforming default.
#[derive(Default)]
pub struct MockModel {
    replies: Arc<RwLock<HashMap<String, String>>>,
    failure: Arc<RwLock<Option<String>>>,
    calls: Arc<RwLock<Vec<MockModelCall>>>,
}

/// Record of one call made to the mock model.
#[derive(Debug, Clone)]
pub struct MockModelCall {
    pub schema_name: String,
    pub user_len: usize,
}

impl MockModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the raw reply for a schema name.
    pub fn with_reply(self, schema_name: impl Into<String>, reply: impl Into<String>) -> Self {
        self.replies
            .write()
            .unwrap()
            .insert(schema_name.into(), reply.into());
        self
    }

    /// Make every call fail with the given backend message.
    pub fn failing_with(self, message: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(message.into());
        self
    }

    /// All calls made to this mock.
    pub fn calls(&self) -> Vec<MockModelCall> {
        self.calls.read().unwrap().clone()
    }

    /// Number of calls that asked for a given schema.
    pub fn calls_for(&self, schema_name: &str) -> usize {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|call| call.schema_name == schema_name)
            .count()
    }

    fn default_reply(schema_name: &str) -> String {
        match schema_name {
            "TaskList" => r#"{"items": []}"#.to_string(),
            "MeetingSummary" => {
                r#"{"title": "Untitled Meeting", "summary": "No summary.", "key_decisions": [], "next_steps": []}"#.to_string()
            }
            "VideoInsights" => {
                r#"{"title": "Untitled Video", "summary": "No summary.", "key_takeaways": [], "topics_covered": [], "action_items": []}"#.to_string()
            }
            other => format!(r#"{{"unknown_schema": "{other}"}}"#),
        }
    }
}

#[async_trait]
impl StructuredModel for MockModel {
    async fn generate_structured(
        &self,
        _system: &str,
        user: &str,
        schema: serde_json::Value,
    ) -> Result<String> {
        let schema_name = schema["title"].as_str().unwrap_or("unknown").to_string();
        self.calls.write().unwrap().push(MockModelCall {
            schema_name: schema_name.clone(),
            user_len: user.len(),
        });

        if let Some(message) = self.failure.read().unwrap().as_ref() {
            return Err(DistillError::extraction(message.clone()));
        }

        Ok(self
            .replies
            .read()
            .unwrap()
            .get(&schema_name)
            .cloned()
            .unwrap_or_else(|| Self::default_reply(&schema_name)))
    }

    fn id(&self) -> &str {
        "mock/scripted"
    }
}

/// A publisher that records bundles instead of calling a remote store.
#[derive(Default)]
pub struct MockPublisher {
    published: Arc<RwLock<Vec<(ResultBundle, String)>>>,
    failure: Arc<RwLock<Option<String>>>,
    counter: Arc<RwLock<usize>>,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every publish fail with the given remote message.
    pub fn failing_with(self, message: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(message.into());
        self
    }

    /// Bundles published so far, with the parent they were sent to.
    pub fn published(&self) -> Vec<(ResultBundle, String)> {
        self.published.read().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for MockPublisher {
    async fn publish(&self, bundle: &ResultBundle, parent: &str) -> Result<String> {
        if let Some(message) = self.failure.read().unwrap().as_ref() {
            return Err(DistillError::publish(message.clone()));
        }

        let mut counter = self.counter.write().unwrap();
        *counter += 1;
        let page_id = format!("mock-page-{counter}");

        self.published
            .write()
            .unwrap()
            .push((bundle.clone(), parent.to_string()));
        Ok(page_id)
    }
}

/// A transcript source backed by a fixed map of references.
#[derive(Default)]
pub struct MockTranscriptSource {
    transcripts: Arc<RwLock<HashMap<String, Transcript>>>,
}

impl MockTranscriptSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transcript for a reference.
    pub fn with_transcript(
        self,
        reference: impl Into<String>,
        text: impl Into<String>,
        duration_minutes: f64,
    ) -> Self {
        self.transcripts
            .write()
            .unwrap()
            .insert(reference.into(), Transcript::new(text, duration_minutes));
        self
    }
}

#[async_trait]
impl TranscriptSource for MockTranscriptSource {
    async fn fetch(&self, reference: &str) -> Result<Transcript> {
        self.transcripts
            .read()
            .unwrap()
            .get(reference)
            .cloned()
            .ok_or_else(|| {
                DistillError::Transcript(format!("no transcript available for: {reference}"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::summary::MeetingSummary;

    #[tokio::test]
    async fn test_mock_model_scripted_reply() {
        let model = MockModel::new().with_reply("TaskList", r#"{"items": []}"#);
        let schema = serde_json::to_value(schemars::schema_for!(crate::types::task::TaskList))
            .unwrap();

        let reply = model.generate_structured("sys", "user", schema).await.unwrap();
        assert_eq!(reply, r#"{"items": []}"#);
        assert_eq!(model.calls_for("TaskList"), 1);
    }

    #[tokio::test]
    async fn test_mock_model_default_reply_parses() {
        let model = MockModel::new();
        let schema =
            serde_json::to_value(schemars::schema_for!(MeetingSummary)).unwrap();

        let reply = model.generate_structured("sys", "user", schema).await.unwrap();
        let parsed: MeetingSummary = serde_json::from_str(&reply).unwrap();
        assert_eq!(parsed.title, "Untitled Meeting");
    }

    #[tokio::test]
    async fn test_mock_transcript_source_unknown_reference_fails() {
        let source = MockTranscriptSource::new().with_transcript("a.wav", "hello", 1.0);

        assert!(source.fetch("a.wav").await.is_ok());
        let err = source.fetch("missing.wav").await.unwrap_err();
        assert!(matches!(err, DistillError::Transcript(_)));
    }
}
