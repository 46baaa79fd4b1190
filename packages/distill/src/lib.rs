//! Transcript Distillation Library
//!
//! Turns spoken or video content (meeting transcripts, video captions)
//! into structured knowledge: summaries, key takeaways, and deduplicated,
//! quality-scored action items, ready for publishing to a document store.
//!
//! # Design
//!
//! - Schema-driven: extraction targets typed records, and backends are
//!   asked for schema-conforming output.
//! - Trait seams at every external boundary (model backend, transcript
//!   source, publishing sink), so the pipeline tests without a network.
//! - One run, one bundle: each run owns its transcript and result; the
//!   only shared state is read-only configuration.
//!
//! # Usage
//!
//! ```rust,ignore
//! use distill::{Config, ExtractionScope, Pipeline, RunMode, RunRequest};
//!
//! let pipeline = Pipeline::new(Config::from_env());
//! let bundle = pipeline
//!     .run(RunRequest {
//!         mode: RunMode::Meeting,
//!         scope: ExtractionScope::Both,
//!         transcript: &text,
//!         duration_minutes: 12.5,
//!         source: "standup.txt",
//!     })
//!     .await?;
//! println!("{} tasks, {}% complete", bundle.task_count(), bundle.accuracy);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - boundary abstractions (StructuredModel, TranscriptSource, Publisher)
//! - [`types`] - record schema (tasks, summaries, insights, bundles)
//! - [`pipeline`] - extraction, dedup, scoring, orchestration
//! - [`model`] - concrete backends and credential-based selection
//! - [`publish`] - Notion publisher
//! - [`history`] - in-memory run history for the hosting driver
//! - [`testing`] - mocks for applications and tests

pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod pipeline;
pub mod publish;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use config::{Config, NoSecrets, SecretString, SecretsProvider};
pub use error::{DistillError, Result};
pub use history::History;
pub use traits::{
    model::StructuredModel,
    publisher::Publisher,
    transcript::{Transcript, TranscriptSource},
};
pub use types::{
    bundle::{Artifact, ResultBundle},
    insights::VideoInsights,
    summary::MeetingSummary,
    task::{Priority, TaskList, TaskRecord},
};

// Re-export pipeline entry points
pub use pipeline::{
    dedupe, estimate_duration_minutes, extract_video_id, score, validate_transcript,
    ExtractionScope, Pipeline, RunMode, RunRequest, RunState,
};

// Re-export the concrete publisher and backends
pub use model::{Gemini, OpenRouter};
pub use publish::NotionPublisher;
