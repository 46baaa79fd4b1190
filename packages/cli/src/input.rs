//! Transcript acquisition for the interactive flows.

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::io::BufRead;

use distill::estimate_duration_minutes;

/// A transcript plus its estimated or reported duration in minutes.
pub struct AcquiredTranscript {
    pub text: String,
    pub duration_minutes: f64,
    pub source: String,
}

/// Ask how the transcript should be provided and read it.
///
/// Two paths: a text file on disk, or pasted lines terminated by `END`.
/// Pasted text gets the rough 130 words-per-minute duration estimate.
pub fn acquire(preset_path: Option<String>) -> Result<AcquiredTranscript> {
    if let Some(path) = preset_path {
        return from_file(&path);
    }

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("How do you want to provide the transcript?")
        .items(&["Read a transcript text file", "Paste transcript text"])
        .default(0)
        .interact()?;

    match choice {
        0 => {
            let path: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Path to transcript file")
                .interact_text()?;
            from_file(path.trim().trim_matches('"'))
        }
        _ => from_paste(),
    }
}

fn from_file(path: &str) -> Result<AcquiredTranscript> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read transcript file: {path}"))?;
    let duration_minutes = estimate_duration_minutes(&text);
    Ok(AcquiredTranscript {
        text,
        duration_minutes,
        source: path.to_string(),
    })
}

fn from_paste() -> Result<AcquiredTranscript> {
    println!("  Paste the transcript below. Type {} on its own line when done:\n", "END".bold());

    let stdin = std::io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().eq_ignore_ascii_case("END") {
            break;
        }
        lines.push(line);
    }

    let text = lines.join(" ");
    let duration_minutes = estimate_duration_minutes(&text);
    Ok(AcquiredTranscript {
        text,
        duration_minutes,
        source: "pasted transcript".to_string(),
    })
}
