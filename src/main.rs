//! pushcast - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pushcast::PushEvent;
use pushcast::logging::init_tracing;
use pushcast::notify::notify_push;

/// Summarize a push event into a chat announcement.
#[derive(Parser, Debug)]
#[command(name = "pushcast")]
#[command(about = "Summarize a push event into a chat announcement")]
#[command(version)]
struct Cli {
    /// Path to the push-event JSON (commits, repository, compare)
    #[arg(long)]
    event: PathBuf,

    /// Path to the unified diff of the pushed range
    #[arg(long)]
    diff: Option<PathBuf>,

    /// LLM provider: openai, openrouter or gemini
    #[arg(long, default_value = "openai")]
    provider: String,

    /// API key for the selected provider
    #[arg(long, env = "PUSHCAST_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Leave repository and compare links out of the embed
    #[arg(long)]
    hide_links: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Step 1: Load the push event
    let raw_event = std::fs::read_to_string(&cli.event)
        .with_context(|| format!("Failed to read event file {}", cli.event.display()))?;
    let event: PushEvent =
        serde_json::from_str(&raw_event).context("Event file is not a valid push payload")?;

    // Step 2: Load the diff, if any
    let diff = match &cli.diff {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read diff file {}", path.display()))?,
        ),
        None => None,
    };

    info!(
        "Summarizing {} commit(s) in {} with {}",
        event.commits.len(),
        event.repository.full_name,
        cli.provider
    );

    // Step 3: Generate message and envelope
    let notification = notify_push(
        &event,
        diff.as_deref(),
        &cli.provider,
        cli.api_key.as_deref(),
        cli.hide_links,
    )
    .await;

    eprintln!("{}", notification.message);
    println!(
        "{}",
        serde_json::to_string_pretty(&notification.embed).context("Failed to encode embed")?
    );

    Ok(())
}
