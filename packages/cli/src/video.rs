//! Video mode: caption transcript → insights and/or tasks.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing::debug;

use distill::{extract_video_id, ExtractionScope, History, Pipeline, RunMode, RunRequest, RunState};

use crate::input;
use crate::push::{advance, confirm_and_publish};
use crate::render;

pub async fn run(
    pipeline: &Pipeline,
    history: &mut History,
    preset_url: Option<String>,
) -> Result<()> {
    let url_input = match preset_url {
        Some(url) => url,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Video URL or id")
            .interact_text()?,
    };
    let video_id = extract_video_id(&url_input);
    debug!(%video_id, "video source");

    let scope = match Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What do you want to extract?")
        .items(&[
            "Key insights + takeaways (talks, tutorials, lectures)",
            "Action items + tasks (meetings recorded on video)",
            "Both",
        ])
        .default(0)
        .interact()?
    {
        0 => ExtractionScope::ArtifactOnly,
        1 => ExtractionScope::TasksOnly,
        _ => ExtractionScope::Both,
    };

    // Caption fetching sits behind the TranscriptSource boundary; here the
    // captions arrive as a text file or pasted text.
    let mut state = advance(RunState::Idle, RunState::AcquiringTranscript);
    let transcript = input::acquire(None)?;

    state = advance(state, RunState::Extracting);
    let bundle = pipeline
        .run(RunRequest {
            mode: RunMode::Video,
            scope,
            transcript: &transcript.text,
            duration_minutes: transcript.duration_minutes,
            source: &url_input,
        })
        .await?;

    state = advance(state, RunState::Scored);
    render::print_bundle(&bundle);

    let state = confirm_and_publish(state, pipeline.config(), &bundle).await?;
    debug!(?state, "video run finished");

    history.record(bundle);
    Ok(())
}
