//! The result of one complete pipeline run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::insights::VideoInsights;
use super::summary::MeetingSummary;
use super::task::TaskList;

/// The narrative artifact a run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Artifact {
    Meeting(MeetingSummary),
    Video(VideoInsights),
}

impl Artifact {
    /// Title used for display and as the published page title.
    pub fn title(&self) -> &str {
        match self {
            Artifact::Meeting(summary) => &summary.title,
            Artifact::Video(insights) => &insights.title,
        }
    }

    /// The narrative summary text.
    pub fn summary(&self) -> &str {
        match self {
            Artifact::Meeting(summary) => &summary.summary,
            Artifact::Video(insights) => &insights.summary,
        }
    }
}

/// Complete output of one pipeline run, ready for publishing or history.
///
/// Owned exclusively by the run that produced it and immutable after
/// creation. The history store keeps a clone for later re-push.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBundle {
    /// The narrative artifact (real or tasks-only placeholder).
    pub artifact: Artifact,

    /// Deduplicated task list, when tasks were requested.
    pub tasks: Option<TaskList>,

    /// Completeness score in [0, 100]; 0.0 whenever tasks are absent
    /// or empty.
    pub accuracy: f64,

    /// Wall-clock seconds spent in the extraction phase.
    pub processing_time_secs: f64,

    /// Duration of the source material in minutes.
    pub source_duration_minutes: f64,

    /// URL, path, or identifier of the source material.
    pub source: String,

    /// When the run completed.
    pub completed_at: DateTime<Utc>,
}

impl ResultBundle {
    /// Number of tasks in the bundle, zero when none were requested.
    pub fn task_count(&self) -> usize {
        self.tasks.as_ref().map_or(0, TaskList::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::task::{Priority, TaskRecord};

    #[test]
    fn test_artifact_title_dispatch() {
        let meeting = Artifact::Meeting(MeetingSummary::placeholder("notes.txt"));
        assert_eq!(meeting.title(), "Meeting notes.txt");

        let video = Artifact::Video(VideoInsights::placeholder("abc12345678"));
        assert_eq!(video.title(), "Video abc12345678");
    }

    #[test]
    fn test_task_count() {
        let bundle = ResultBundle {
            artifact: Artifact::Meeting(MeetingSummary::placeholder("x")),
            tasks: Some(TaskList::new(vec![TaskRecord::new(
                "Review the budget numbers",
                Priority::Medium,
            )])),
            accuracy: 55.0,
            processing_time_secs: 1.2,
            source_duration_minutes: 10.0,
            source: "x".to_string(),
            completed_at: Utc::now(),
        };
        assert_eq!(bundle.task_count(), 1);
    }
}
