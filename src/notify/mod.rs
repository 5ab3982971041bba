//! Push notification assembly: summary generation, fallback and envelope.

pub mod embed;
pub mod fallback;
pub mod summary;

pub use embed::{EMBED_COLOR, Embed, EmbedField, EmbedFooter, build_embed, build_embed_at};
pub use fallback::fallback_message;
pub use summary::{Notification, generate_summary, generate_summary_with, notify_push};
