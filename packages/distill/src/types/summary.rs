//! Meeting summary artifact.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Structured summary of a meeting transcript.
///
/// The field caps (8-word title, five decisions, five next steps) are
/// advisory: they are embedded in the extraction instruction, and the
/// backend is trusted to honor them. Nothing downstream depends on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MeetingSummary {
    /// Short meeting title, max 8 words.
    pub title: String,

    /// 3-4 sentence executive summary of what was discussed.
    pub summary: String,

    /// Key decisions made, up to 5 points.
    #[serde(default)]
    pub key_decisions: Vec<String>,

    /// Next steps agreed upon, up to 5 points.
    #[serde(default)]
    pub next_steps: Vec<String>,
}

impl MeetingSummary {
    /// Placeholder summary for tasks-only runs so downstream publishing
    /// has a title to use. Never produced by extraction.
    pub fn placeholder(source: &str) -> Self {
        Self {
            title: format!("Meeting {source}"),
            summary: "Task extraction mode — see tasks database.".to_string(),
            key_decisions: vec![],
            next_steps: vec![],
        }
    }
}
