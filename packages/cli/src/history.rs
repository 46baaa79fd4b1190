//! Session history: listing and per-entry re-push.
//!
//! Bundles land here fully extracted and scored, so a declined or failed
//! publish can be retried without another model call.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use tracing::debug;

use distill::{Config, History, RunState};

use crate::push::confirm_and_publish;
use crate::render;

pub async fn run(config: &Config, history: &History) -> Result<()> {
    render::print_history(history);
    if history.is_empty() {
        return Ok(());
    }

    let mut items: Vec<String> = history
        .entries()
        .iter()
        .map(|bundle| {
            format!(
                "Re-push '{}' ({} task(s))",
                bundle.artifact.title(),
                bundle.task_count()
            )
        })
        .collect();
    items.push("Back".to_string());

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Re-push an entry?")
        .items(&items)
        .default(items.len() - 1)
        .interact()?;

    if let Some(bundle) = history.entries().get(choice) {
        let state = confirm_and_publish(RunState::Scored, config, bundle).await?;
        debug!(?state, source = %bundle.source, "history re-push finished");
    }
    Ok(())
}
