//! The distillation pipeline - the core of the library.
//!
//! The pipeline sequences:
//! - Backend selection (credential precedence)
//! - Structured extraction (one call per requested artifact type)
//! - Near-duplicate task collapsing
//! - Deterministic completeness scoring
//! - Bundle assembly with timing metadata

pub mod dedupe;
pub mod invoke;
pub mod prompts;
pub mod run;
pub mod score;
pub mod video;

pub use dedupe::dedupe;
pub use invoke::{
    extract_meeting_summary, extract_tasks, extract_video_insights, invoke_structured,
    validate_transcript, MIN_TRANSCRIPT_CHARS,
};
pub use run::{ExtractionScope, Pipeline, RunMode, RunRequest, RunState};
pub use score::{score, score_record};
pub use video::{estimate_duration_minutes, extract_video_id};
