//! Integration tests for the full distillation pipeline.
//!
//! These tests drive the pipeline end to end over mocks:
//! 1. Validate transcript
//! 2. Extract artifact + tasks
//! 3. Dedupe
//! 4. Score
//! 5. Publish (or keep the bundle on failure)

use distill::{
    dedupe, score,
    testing::{MockModel, MockPublisher, MockTranscriptSource},
    Config, DistillError, ExtractionScope, History, Pipeline, Priority, Publisher, RunMode,
    RunRequest, TaskList, TaskRecord, TranscriptSource,
};

const MEETING_TRANSCRIPT: &str =
    "Alice will send the Q3 report by January 10th. Bob needs to review the budget.";

/// A model scripted with a two-task meeting scenario, including a
/// duplicate the backend emitted twice.
fn scripted_model() -> MockModel {
    MockModel::new()
        .with_reply(
            "MeetingSummary",
            r#"{"title": "Q3 Report Sync", "summary": "Alice owns the Q3 report; Bob reviews the budget.", "key_decisions": ["Report ships January 10th"], "next_steps": ["Budget review"]}"#,
        )
        .with_reply(
            "TaskList",
            r#"{"items": [
                {"task": "Send the Q3 report", "assignee": "Alice", "due_date": "2025-01-10", "priority": "High"},
                {"task": "Review the budget", "assignee": "Bob", "due_date": "TBD", "priority": "Medium"},
                {"task": "  send the q3 report ", "assignee": "ALICE", "due_date": "2025-01-10", "priority": "High"}
            ]}"#,
        )
        .with_reply(
            "VideoInsights",
            r#"{"title": "Budget Walkthrough", "summary": "A walkthrough of the quarterly numbers.", "key_takeaways": ["Revenue up 4%"], "topics_covered": ["Q3 revenue"], "action_items": ["Read the full report"]}"#,
        )
}

#[tokio::test]
async fn test_meeting_end_to_end() {
    let model = scripted_model();
    let pipeline = Pipeline::new(Config::default());

    let bundle = pipeline
        .run_with_model(
            &model,
            RunRequest {
                mode: RunMode::Meeting,
                scope: ExtractionScope::Both,
                transcript: MEETING_TRANSCRIPT,
                duration_minutes: 8.0,
                source: "weekly-sync.txt",
            },
        )
        .await
        .unwrap();

    // The duplicate collapses: two unique tasks remain
    assert_eq!(bundle.task_count(), 2);
    // Alice's record scores 100, Bob's 80 (TBD due date) → mean 90.0
    assert_eq!(bundle.accuracy, 90.0);
    assert_eq!(bundle.artifact.title(), "Q3 Report Sync");

    // Exactly one call per artifact type, sequentially
    assert_eq!(model.calls_for("MeetingSummary"), 1);
    assert_eq!(model.calls_for("TaskList"), 1);
}

#[tokio::test]
async fn test_video_end_to_end_with_transcript_source() {
    let source = MockTranscriptSource::new().with_transcript(
        "dQw4w9WgXcQ",
        "The speaker walks through the quarterly numbers and explains the revenue model in depth.",
        14.5,
    );

    let transcript = source.fetch("dQw4w9WgXcQ").await.unwrap();
    assert_eq!(transcript.duration_minutes, 14.5);

    let model = scripted_model();
    let pipeline = Pipeline::new(Config::default());

    let bundle = pipeline
        .run_with_model(
            &model,
            RunRequest {
                mode: RunMode::Video,
                scope: ExtractionScope::ArtifactOnly,
                transcript: &transcript.text,
                duration_minutes: transcript.duration_minutes,
                source: "https://youtu.be/dQw4w9WgXcQ",
            },
        )
        .await
        .unwrap();

    assert_eq!(bundle.artifact.title(), "Budget Walkthrough");
    assert!(bundle.tasks.is_none());
    assert_eq!(bundle.accuracy, 0.0);
    assert_eq!(model.calls_for("TaskList"), 0);
}

#[tokio::test]
async fn test_failed_publish_preserves_bundle_for_retry() {
    let model = scripted_model();
    let pipeline = Pipeline::new(Config::default());

    let bundle = pipeline
        .run_with_model(
            &model,
            RunRequest {
                mode: RunMode::Meeting,
                scope: ExtractionScope::Both,
                transcript: MEETING_TRANSCRIPT,
                duration_minutes: 8.0,
                source: "weekly-sync.txt",
            },
        )
        .await
        .unwrap();

    let failing = MockPublisher::new().failing_with("rate limited");
    let err = failing.publish(&bundle, "parent-page").await.unwrap_err();
    assert!(matches!(err, DistillError::Publish(_)));

    // Bundle intact: retry against a working sink without re-extraction
    let working = MockPublisher::new();
    let page_id = working.publish(&bundle, "parent-page").await.unwrap();
    assert_eq!(page_id, "mock-page-1");
    assert_eq!(working.published().len(), 1);
    assert_eq!(model.calls_for("TaskList"), 1);
}

#[tokio::test]
async fn test_history_retains_bundles_newest_first() {
    let model = scripted_model();
    let pipeline = Pipeline::new(Config::default());
    let mut history = History::new();

    for source in ["first.txt", "second.txt"] {
        let bundle = pipeline
            .run_with_model(
                &model,
                RunRequest {
                    mode: RunMode::Meeting,
                    scope: ExtractionScope::Both,
                    transcript: MEETING_TRANSCRIPT,
                    duration_minutes: 8.0,
                    source,
                },
            )
            .await
            .unwrap();
        history.record(bundle);
    }

    assert_eq!(history.len(), 2);
    assert_eq!(history.latest().unwrap().source, "second.txt");

    // A history entry can be re-pushed as-is
    let publisher = MockPublisher::new();
    let entry = history.latest().unwrap();
    publisher.publish(entry, "parent").await.unwrap();
}

#[tokio::test]
async fn test_history_entry_republished_after_failed_publish() {
    let model = scripted_model();
    let pipeline = Pipeline::new(Config::default());
    let mut history = History::new();

    let bundle = pipeline
        .run_with_model(
            &model,
            RunRequest {
                mode: RunMode::Meeting,
                scope: ExtractionScope::Both,
                transcript: MEETING_TRANSCRIPT,
                duration_minutes: 8.0,
                source: "weekly-sync.txt",
            },
        )
        .await
        .unwrap();
    history.record(bundle);

    // First publish fails; the history copy is the retry source
    let failing = MockPublisher::new().failing_with("rate limited");
    let entry = history.latest().unwrap();
    assert!(failing.publish(entry, "parent").await.is_err());

    let working = MockPublisher::new();
    let page_id = working.publish(entry, "parent").await.unwrap();
    assert_eq!(page_id, "mock-page-1");

    // The re-push carries the scored bundle verbatim, with no new
    // extraction call
    let (published, parent) = &working.published()[0];
    assert_eq!(published.accuracy, entry.accuracy);
    assert_eq!(published.task_count(), 2);
    assert_eq!(parent, "parent");
    assert_eq!(model.calls_for("TaskList"), 1);
}

#[test]
fn test_dedupe_then_score_matches_hand_computation() {
    let list = TaskList::new(vec![
        TaskRecord::new("Send the report", Priority::High)
            .with_assignee("Alice")
            .with_due_date("2025-01-10"),
        TaskRecord::new("Follow up", Priority::Medium),
        TaskRecord::new("SEND THE REPORT", Priority::High)
            .with_assignee(" alice ")
            .with_due_date("2025-01-10"),
    ]);

    let deduped = dedupe(list);
    assert_eq!(deduped.len(), 2);
    // (100 + 15) / 2 = 57.5
    assert_eq!(score(&deduped), 57.5);
}
