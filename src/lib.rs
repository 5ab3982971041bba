//! pushcast - Turns pushed commits and their diff into short, user-facing chat announcements.
//!
//! # Overview
//!
//! pushcast windows the pushed diff down to its changed lines, asks one LLM
//! backend (OpenAI, OpenRouter or Gemini) for an evidence-based summary, and
//! renders the answer into a chat message and embed. When the backend call
//! fails the message is built from the commit titles instead, so a
//! notification is always produced.

pub mod config;
pub mod diff;
pub mod error;
pub mod github;
pub mod llm;
pub mod logging;
pub mod notify;

// Re-export commonly used types
pub use error::{PipelineError, ProviderError};
pub use github::{Commit, PushEvent, Repository};
pub use llm::{Backend, ParsedSummary, Provider, TextGenerator};
pub use notify::{Embed, Notification, fallback_message, generate_summary, notify_push};
