//! Typed extraction invocation.
//!
//! Bridges the object-safe [`StructuredModel`] trait and the typed record
//! schema: generates the JSON schema for the target type, sends one
//! request, and parses the reply strictly.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{DistillError, Result};
use crate::pipeline::prompts;
use crate::traits::model::StructuredModel;
use crate::types::{insights::VideoInsights, summary::MeetingSummary, task::TaskList};

/// Minimum viable transcript length, in characters after trimming.
pub const MIN_TRANSCRIPT_CHARS: usize = 50;

/// Reject transcripts below the minimum viable length.
///
/// Runs before any network call.
pub fn validate_transcript(transcript: &str) -> Result<()> {
    let trimmed_len = transcript.trim().chars().count();
    if trimmed_len < MIN_TRANSCRIPT_CHARS {
        return Err(DistillError::InputValidation {
            reason: format!(
                "transcript too short: {trimmed_len} chars after trimming (minimum {MIN_TRANSCRIPT_CHARS})"
            ),
        });
    }
    Ok(())
}

/// Invoke the model once and parse the reply into `T`.
///
/// A reply that fails to parse is an [`DistillError::Extraction`] with the
/// parse failure truncated for display.
pub async fn invoke_structured<T>(
    model: &dyn StructuredModel,
    system: &str,
    user: &str,
) -> Result<T>
where
    T: DeserializeOwned + JsonSchema,
{
    let schema = inline_schema::<T>()?;

    debug!(backend = model.id(), "structured extraction call");
    let raw = model.generate_structured(system, user, schema).await?;
    let cleaned = strip_code_fences(&raw);

    serde_json::from_str(cleaned)
        .map_err(|e| DistillError::extraction(format!("malformed reply: {e}")))
}

/// Extract all action items from a transcript.
pub async fn extract_tasks(model: &dyn StructuredModel, transcript: &str) -> Result<TaskList> {
    invoke_structured(
        model,
        prompts::MEETING_ANALYST_SYSTEM,
        &prompts::format_task_prompt(transcript),
    )
    .await
}

/// Generate a structured summary of a meeting.
pub async fn extract_meeting_summary(
    model: &dyn StructuredModel,
    transcript: &str,
) -> Result<MeetingSummary> {
    invoke_structured(
        model,
        prompts::MEETING_ANALYST_SYSTEM,
        &prompts::format_summary_prompt(transcript),
    )
    .await
}

/// Extract key insights from a video transcript.
pub async fn extract_video_insights(
    model: &dyn StructuredModel,
    transcript: &str,
) -> Result<VideoInsights> {
    invoke_structured(
        model,
        prompts::CONTENT_ANALYST_SYSTEM,
        &prompts::format_insights_prompt(transcript),
    )
    .await
}

/// JSON schema for `T` with all subschemas inlined.
///
/// Nested types must not go through `definitions`/`$ref` indirection:
/// Gemini's `responseSchema` is an OpenAPI subset that supports neither
/// keyword, and inlining keeps the OpenAI-style `json_schema` payload
/// self-contained too.
fn inline_schema<T: JsonSchema>() -> Result<serde_json::Value> {
    let generator = schemars::gen::SchemaSettings::draft07()
        .with(|settings| settings.inline_subschemas = true)
        .into_generator();
    serde_json::to_value(generator.into_root_schema_for::<T>())
        .map_err(|e| DistillError::extraction(format!("schema generation: {e}")))
}

/// Some backends wrap JSON replies in markdown code fences.
fn strip_code_fences(raw: &str) -> &str {
    raw.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}
