//! Chat-message envelope for a push notification.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::github::Repository;

/// Accent color of every push embed.
pub const EMBED_COLOR: u32 = 0x5865F2;

pub const FOOTER_TEXT: &str = "pushcast";

/// Platform limit on embed descriptions.
pub const MAX_DESCRIPTION_CHARS: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Envelope handed to the chat dispatcher.
///
/// `fields` is left out of the serialized form entirely when links are hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub timestamp: String,
    pub footer: EmbedFooter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<EmbedField>>,
}

/// Build the envelope, stamped with the current time.
pub fn build_embed(
    message: &str,
    repository: &Repository,
    compare_url: &str,
    hide_links: bool,
) -> Embed {
    build_embed_at(message, repository, compare_url, hide_links, Utc::now())
}

/// Build the envelope with an explicit generation time.
pub fn build_embed_at(
    message: &str,
    repository: &Repository,
    compare_url: &str,
    hide_links: bool,
    generated_at: DateTime<Utc>,
) -> Embed {
    let fields = if hide_links {
        None
    } else {
        Some(vec![
            EmbedField {
                name: "Repository".to_string(),
                value: format!("[{}]({})", repository.full_name, repository.html_url),
                inline: true,
            },
            EmbedField {
                name: "Compare".to_string(),
                value: format!("[View changes]({})", compare_url),
                inline: true,
            },
        ])
    };

    Embed {
        title: format!("{}: new changes", repository.full_name),
        description: truncate_description(message),
        color: EMBED_COLOR,
        timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        footer: EmbedFooter {
            text: FOOTER_TEXT.to_string(),
        },
        fields,
    }
}

fn truncate_description(message: &str) -> String {
    if message.chars().count() <= MAX_DESCRIPTION_CHARS {
        return message.to_string();
    }
    let mut out: String = message.chars().take(MAX_DESCRIPTION_CHARS - 1).collect();
    out.push('…');
    out
}
