//! Pipeline orchestration: one transcript in, one [`ResultBundle`] out.
//!
//! The orchestrator sequences model selection, the per-artifact
//! extraction calls, deduplication, and scoring. Extraction calls run
//! sequentially; each is a blocking network round trip with no internal
//! parallelism and no retry.

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::model::selector;
use crate::pipeline::{dedupe, invoke, score};
use crate::traits::model::StructuredModel;
use crate::types::{
    bundle::{Artifact, ResultBundle},
    insights::VideoInsights,
    summary::MeetingSummary,
    task::TaskList,
};

/// What kind of source the transcript came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Meeting,
    Video,
}

/// Which extractions the caller requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionScope {
    /// Narrative artifact only (summary or insights).
    ArtifactOnly,
    /// Task list only; a placeholder artifact is synthesized for
    /// downstream publishing.
    TasksOnly,
    /// Both the narrative artifact and the task list.
    Both,
}

impl ExtractionScope {
    pub fn wants_artifact(&self) -> bool {
        matches!(self, Self::ArtifactOnly | Self::Both)
    }

    pub fn wants_tasks(&self) -> bool {
        matches!(self, Self::TasksOnly | Self::Both)
    }
}

/// Lifecycle of one pipeline run, tracked by the hosting driver.
///
/// There is no cancellation mid-extraction; the only interruption points
/// are before the run starts and after scoring. A failed publish leaves
/// the bundle intact for a manual re-attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    AcquiringTranscript,
    Extracting,
    Scored,
    PublishRequested,
    Published,
    PublishFailed,
    PublishSkipped,
}

impl RunState {
    /// Whether `next` is a legal successor of this state.
    pub fn can_transition_to(&self, next: RunState) -> bool {
        use RunState::*;
        matches!(
            (self, next),
            (Idle, AcquiringTranscript)
                | (AcquiringTranscript, Extracting)
                | (Extracting, Scored)
                | (Scored, PublishRequested)
                | (Scored, PublishSkipped)
                | (PublishRequested, Published)
                | (PublishRequested, PublishFailed)
                // Manual retry after a failed publish
                | (PublishFailed, PublishRequested)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunState::Published | RunState::PublishSkipped | RunState::PublishFailed
        )
    }
}

/// One run's inputs.
#[derive(Debug, Clone)]
pub struct RunRequest<'a> {
    pub mode: RunMode,
    pub scope: ExtractionScope,
    pub transcript: &'a str,
    /// Duration of the source material in minutes (from the transcript
    /// source, or estimated for pasted text).
    pub duration_minutes: f64,
    /// URL, path, or identifier of the source.
    pub source: &'a str,
}

/// The pipeline orchestrator.
///
/// Holds the read-only configuration for credential resolution. Each run
/// re-resolves the backend, so credential changes picked up by
/// [`Config::reload`] take effect on the next request.
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration (after an explicit reload by the caller).
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Run the pipeline end to end, resolving a backend first.
    pub async fn run(&self, request: RunRequest<'_>) -> Result<ResultBundle> {
        let model = selector::resolve(&self.config)?;
        self.run_with_model(model.as_ref(), request).await
    }

    /// Run the pipeline against an already-resolved backend.
    ///
    /// Validates the transcript, runs the requested extraction calls
    /// sequentially, dedupes and scores the task list, and assembles the
    /// bundle. The timer covers the extraction phase only; transcript
    /// acquisition happened before this call.
    pub async fn run_with_model(
        &self,
        model: &dyn StructuredModel,
        request: RunRequest<'_>,
    ) -> Result<ResultBundle> {
        invoke::validate_transcript(request.transcript)?;

        info!(
            mode = ?request.mode,
            scope = ?request.scope,
            backend = model.id(),
            source = request.source,
            "starting extraction"
        );
        let started = Instant::now();

        let artifact = if request.scope.wants_artifact() {
            match request.mode {
                RunMode::Meeting => Artifact::Meeting(
                    invoke::extract_meeting_summary(model, request.transcript).await?,
                ),
                RunMode::Video => Artifact::Video(
                    invoke::extract_video_insights(model, request.transcript).await?,
                ),
            }
        } else {
            // Tasks-only: synthesize a placeholder so publishing has a
            // title. Never sent through extraction.
            match request.mode {
                RunMode::Meeting => Artifact::Meeting(MeetingSummary::placeholder(request.source)),
                RunMode::Video => Artifact::Video(VideoInsights::placeholder(request.source)),
            }
        };

        let tasks = if request.scope.wants_tasks() {
            let raw = invoke::extract_tasks(model, request.transcript).await?;
            let clean = dedupe::dedupe(raw);
            debug!(count = clean.len(), "task list after dedup");
            Some(clean)
        } else {
            None
        };

        let accuracy = tasks.as_ref().map_or(0.0, score::score);
        let processing_time_secs = started.elapsed().as_secs_f64();

        info!(
            accuracy,
            processing_time_secs,
            tasks = tasks.as_ref().map_or(0, TaskList::len),
            "extraction complete"
        );

        Ok(ResultBundle {
            artifact,
            tasks,
            accuracy,
            processing_time_secs,
            source_duration_minutes: request.duration_minutes,
            source: request.source.to_string(),
            completed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DistillError;
    use crate::testing::MockModel;

    const TRANSCRIPT: &str =
        "Alice will send the Q3 report by January 10th. Bob needs to review the budget.";

    fn meeting_replies() -> MockModel {
        MockModel::new()
            .with_reply(
                "MeetingSummary",
                r#"{"title": "Q3 Review", "summary": "Report and budget sync.", "key_decisions": ["Ship Q3 report"], "next_steps": ["Budget review"]}"#,
            )
            .with_reply(
                "TaskList",
                r#"{"items": [
                    {"task": "Send the Q3 report", "assignee": "Alice", "due_date": "2025-01-10", "priority": "High"},
                    {"task": "Review the budget", "assignee": "Bob", "due_date": "TBD", "priority": "Medium"}
                ]}"#,
            )
    }

    fn request(scope: ExtractionScope) -> RunRequest<'static> {
        RunRequest {
            mode: RunMode::Meeting,
            scope,
            transcript: TRANSCRIPT,
            duration_minutes: 12.0,
            source: "standup.txt",
        }
    }

    #[tokio::test]
    async fn test_meeting_run_produces_scored_bundle() {
        let model = meeting_replies();
        let pipeline = Pipeline::new(Config::default());

        let bundle = pipeline
            .run_with_model(&model, request(ExtractionScope::Both))
            .await
            .unwrap();

        assert_eq!(bundle.artifact.title(), "Q3 Review");
        assert_eq!(bundle.task_count(), 2);
        // Alice: 100 (3+ words, named, dated, priority); Bob: 40+25+15 = 80
        assert_eq!(bundle.accuracy, 90.0);
        assert_eq!(bundle.source_duration_minutes, 12.0);
    }

    #[tokio::test]
    async fn test_artifact_only_has_zero_accuracy() {
        let model = meeting_replies();
        let pipeline = Pipeline::new(Config::default());

        let bundle = pipeline
            .run_with_model(&model, request(ExtractionScope::ArtifactOnly))
            .await
            .unwrap();

        assert!(bundle.tasks.is_none());
        assert_eq!(bundle.accuracy, 0.0);
        // No task extraction call was made
        assert_eq!(model.calls_for("TaskList"), 0);
    }

    #[tokio::test]
    async fn test_tasks_only_synthesizes_placeholder() {
        let model = meeting_replies();
        let pipeline = Pipeline::new(Config::default());

        let bundle = pipeline
            .run_with_model(&model, request(ExtractionScope::TasksOnly))
            .await
            .unwrap();

        assert!(bundle.artifact.title().contains("standup.txt"));
        assert_eq!(bundle.task_count(), 2);
        // The placeholder never goes through extraction
        assert_eq!(model.calls_for("MeetingSummary"), 0);
    }

    #[tokio::test]
    async fn test_short_transcript_rejected_before_any_call() {
        let model = meeting_replies();
        let pipeline = Pipeline::new(Config::default());

        let err = pipeline
            .run_with_model(
                &model,
                RunRequest {
                    transcript: "too short",
                    ..request(ExtractionScope::Both)
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DistillError::InputValidation { .. }));
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn test_run_without_credentials_is_config_error() {
        let pipeline = Pipeline::new(Config::default());
        let err = pipeline.run(request(ExtractionScope::Both)).await.unwrap_err();
        assert!(matches!(err, DistillError::Config(_)));
    }

    #[test]
    fn test_run_state_transitions() {
        use RunState::*;
        assert!(Idle.can_transition_to(AcquiringTranscript));
        assert!(AcquiringTranscript.can_transition_to(Extracting));
        assert!(Extracting.can_transition_to(Scored));
        assert!(Scored.can_transition_to(PublishRequested));
        assert!(Scored.can_transition_to(PublishSkipped));
        assert!(PublishRequested.can_transition_to(Published));
        assert!(PublishRequested.can_transition_to(PublishFailed));
        assert!(PublishFailed.can_transition_to(PublishRequested));

        assert!(!Idle.can_transition_to(Extracting));
        assert!(!Published.can_transition_to(PublishRequested));
        assert!(Published.is_terminal());
        assert!(!Scored.is_terminal());
    }
}
