//! Interactive driver for the distillation pipeline.
//!
//! Meeting transcripts and video captions in, published summaries and
//! task databases out. Runs a mode menu by default; subcommands run a
//! single mode non-interactively enough for scripting.

mod history;
mod input;
mod meeting;
mod push;
mod render;
mod video;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Select};
use tracing_subscriber::EnvFilter;

use distill::{Config, History, Pipeline};

#[derive(Parser)]
#[command(name = "distill", about = "Turn transcripts into structured notes and tasks")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Meeting mode: transcript file or pasted text → summary + tasks
    Meeting {
        /// Path to a transcript text file (prompts when omitted)
        #[arg(long)]
        source: Option<String>,
    },
    /// Video mode: caption transcript → insights and/or tasks
    Video {
        /// Video URL or 11-character id (prompts when omitted)
        #[arg(long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let pipeline = Pipeline::new(config);
    let mut history = History::new();

    match cli.command {
        Some(Command::Meeting { source }) => {
            meeting::run(&pipeline, &mut history, source).await?;
        }
        Some(Command::Video { url }) => {
            video::run(&pipeline, &mut history, url).await?;
        }
        None => run_menu(pipeline, history).await?,
    }

    Ok(())
}

fn print_banner(config: &Config) {
    println!("\n{}", "═".repeat(65).dimmed());
    println!("   {}", "TRANSCRIPT DISTILLER".bold());
    println!("   Transcripts → summaries, tasks, and published notes");
    println!("{}", "═".repeat(65).dimmed());
    let ai = if config.has_ai_credential() { "●".green() } else { "●".red() };
    let docstore = if config.has_docstore() { "●".green() } else { "●".red() };
    println!("   {ai} AI model    {docstore} Document store\n");
}

async fn run_menu(pipeline: Pipeline, mut history: History) -> Result<()> {
    loop {
        print_banner(pipeline.config());

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Choose a mode")
            .items(&[
                "Meeting mode — transcript → summary + tasks",
                "Video mode — captions → insights + tasks",
                "History — runs from this session",
                "Quit",
            ])
            .default(0)
            .interact()?;

        let outcome = match choice {
            0 => meeting::run(&pipeline, &mut history, None).await,
            1 => video::run(&pipeline, &mut history, None).await,
            2 => history::run(pipeline.config(), &history).await,
            _ => break,
        };

        if let Err(e) = outcome {
            eprintln!("\n  {} {e:#}", "✗".red());
        }
    }

    println!("\n  Bye!\n");
    Ok(())
}
