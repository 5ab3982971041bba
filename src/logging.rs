//! Tracing setup and detached diagnostic logging.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Maximum characters per diagnostic log chunk.
pub const LOG_CHUNK_CHARS: usize = 1900;

/// Install the global tracing subscriber for the binary.
///
/// `RUST_LOG` wins when set; otherwise `pushcast=info`, or `pushcast=debug`
/// when `verbose` is true.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "pushcast=debug" } else { "pushcast=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Split text into chunks of at most `max_chars` characters, on char boundaries.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    if max_chars == 0 {
        return vec![text.to_string()];
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Log long diagnostic text in chunks from a detached task.
///
/// The caller never waits on the task. Outside a tokio runtime this is a no-op.
pub fn spawn_chunked_log(label: &'static str, text: String) {
    let Ok(handle) = tokio::runtime::Handle::try_current() else {
        return;
    };

    handle.spawn(async move {
        let chunks = chunk_text(&text, LOG_CHUNK_CHARS);
        let total = chunks.len();
        for (idx, chunk) in chunks.iter().enumerate() {
            debug!(part = idx + 1, total, "{}: {}", label, chunk);
        }
    });
}
