//! Meeting mode: transcript → summary + deduplicated, scored tasks.

use anyhow::Result;
use tracing::debug;

use distill::{ExtractionScope, History, Pipeline, RunMode, RunRequest, RunState};

use crate::input;
use crate::push::{advance, confirm_and_publish};
use crate::render;

pub async fn run(
    pipeline: &Pipeline,
    history: &mut History,
    preset_path: Option<String>,
) -> Result<()> {
    let mut state = advance(RunState::Idle, RunState::AcquiringTranscript);
    let transcript = input::acquire(preset_path)?;

    state = advance(state, RunState::Extracting);
    debug!(source = %transcript.source, "running extraction");
    let bundle = pipeline
        .run(RunRequest {
            mode: RunMode::Meeting,
            scope: ExtractionScope::Both,
            transcript: &transcript.text,
            duration_minutes: transcript.duration_minutes,
            source: &transcript.source,
        })
        .await?;

    state = advance(state, RunState::Scored);
    render::print_bundle(&bundle);

    let state = confirm_and_publish(state, pipeline.config(), &bundle).await?;
    debug!(?state, "meeting run finished");

    history.record(bundle);
    Ok(())
}
