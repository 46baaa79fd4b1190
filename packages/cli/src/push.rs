//! Publish confirmation shared by both modes.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing::debug;

use distill::{Config, NotionPublisher, Publisher, ResultBundle, RunState};

/// Log a run-state transition, asserting it is a legal one.
pub fn advance(from: RunState, to: RunState) -> RunState {
    debug_assert!(from.can_transition_to(to), "illegal transition {from:?} → {to:?}");
    debug!(?from, ?to, "run state");
    to
}

/// Ask before pushing. A failed push reports the error and returns
/// `PublishFailed`; the bundle stays in the caller's hands (and in
/// history) for a manual retry without re-running extraction.
pub async fn confirm_and_publish(
    state: RunState,
    config: &Config,
    bundle: &ResultBundle,
) -> Result<RunState> {
    let (Some(token), Some(parent)) = (&config.docstore_token, &config.docstore_parent_id)
    else {
        println!(
            "  {} Document store not configured — skipping publish.",
            "→".dimmed()
        );
        return Ok(advance(state, RunState::PublishSkipped));
    };

    let push = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Push to your workspace?")
        .default(true)
        .interact()?;

    if !push {
        println!("  Skipped publish.");
        return Ok(advance(state, RunState::PublishSkipped));
    }

    let state = advance(state, RunState::PublishRequested);
    let publisher = NotionPublisher::new(token.clone());
    match publisher.publish(bundle, parent).await {
        Ok(page_id) => {
            println!(
                "\n  {} '{}' is live (page {page_id}).",
                "✓".green(),
                bundle.artifact.title()
            );
            Ok(advance(state, RunState::Published))
        }
        Err(e) => {
            eprintln!("\n  {} Publish failed: {e}", "✗".red());
            eprintln!("  The result is kept in history — retry from there.");
            Ok(advance(state, RunState::PublishFailed))
        }
    }
}
