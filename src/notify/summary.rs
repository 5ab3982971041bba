//! Summary generation with fallback.
//!
//! Runs the diff through windowing, prompting, one backend call and
//! normalization. Any error on that path is converted here, and only here,
//! into the commit-derived fallback message.

use tracing::{debug, warn};

use crate::diff::window_diff;
use crate::error::PipelineError;
use crate::github::{Commit, PushEvent, Repository};
use crate::llm::{Backend, SYSTEM_INSTRUCTION, TextGenerator, build_prompt, normalize_response};
use crate::logging::spawn_chunked_log;
use crate::notify::embed::{Embed, build_embed};
use crate::notify::fallback::fallback_message;

/// Final message plus the envelope built around it.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub embed: Embed,
}

/// Generate the summary message for a push.
///
/// This function **never fails**. An unknown provider, a missing API key or
/// any backend error yields [`fallback_message`] instead.
pub async fn generate_summary(
    commits: &[Commit],
    provider: &str,
    api_key: Option<&str>,
    repository: &Repository,
    diff: Option<&str>,
) -> String {
    let result = match Backend::from_name(provider, api_key) {
        Ok(backend) => summarize(&backend, repository, diff).await,
        Err(e) => Err(e),
    };
    finish(result, commits, repository)
}

/// Same as [`generate_summary`] with an already-built generator.
pub async fn generate_summary_with<G>(
    generator: &G,
    commits: &[Commit],
    repository: &Repository,
    diff: Option<&str>,
) -> String
where
    G: TextGenerator + ?Sized,
{
    let result = summarize(generator, repository, diff).await;
    finish(result, commits, repository)
}

/// Summarize a push event and wrap the result in an envelope.
pub async fn notify_push(
    event: &PushEvent,
    diff: Option<&str>,
    provider: &str,
    api_key: Option<&str>,
    hide_links: bool,
) -> Notification {
    let message =
        generate_summary(&event.commits, provider, api_key, &event.repository, diff).await;
    let embed = build_embed(&message, &event.repository, event.compare_url(), hide_links);
    Notification { message, embed }
}

async fn summarize<G>(
    generator: &G,
    repository: &Repository,
    diff: Option<&str>,
) -> Result<String, PipelineError>
where
    G: TextGenerator + ?Sized,
{
    let windowed = window_diff(diff);
    let prompt = build_prompt(repository, &windowed);

    debug!(
        provider = %generator.provider(),
        "Summary prompt length: {} chars (windowed diff {} chars)",
        prompt.len(),
        windowed.len()
    );
    spawn_chunked_log("windowed diff", windowed);

    let raw = generator.generate(&prompt, SYSTEM_INSTRUCTION).await?;
    Ok(normalize_response(&raw))
}

fn finish(
    result: Result<String, PipelineError>,
    commits: &[Commit],
    repository: &Repository,
) -> String {
    match result {
        Ok(message) => message,
        Err(e) => {
            warn!(
                "Summary generation failed: {}. Using commit fallback.",
                e.summary()
            );
            debug!("Summary failure detail: {}", e);
            fallback_message(commits, repository)
        }
    }
}
