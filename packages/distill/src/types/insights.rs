//! Video insight artifact.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Key insights extracted from a video transcript, for someone who
/// doesn't have time to watch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VideoInsights {
    /// Short title describing what the video is about.
    pub title: String,

    /// 3-4 sentence summary of the video content.
    pub summary: String,

    /// Most important points from the video, up to 7.
    #[serde(default)]
    pub key_takeaways: Vec<String>,

    /// Main topics or sections covered, up to 5.
    #[serde(default)]
    pub topics_covered: Vec<String>,

    /// Things the viewer should do or look into after watching, up to 5.
    #[serde(default)]
    pub action_items: Vec<String>,
}

impl VideoInsights {
    /// Placeholder insights for tasks-only runs so downstream publishing
    /// has a title to use. Never produced by extraction.
    pub fn placeholder(source: &str) -> Self {
        Self {
            title: format!("Video {source}"),
            summary: "Task extraction mode — see tasks database.".to_string(),
            key_takeaways: vec![],
            topics_covered: vec![],
            action_items: vec![],
        }
    }
}
