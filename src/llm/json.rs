//! Tolerant parsing of model output into the final message.
//!
//! Models often wrap their JSON in markdown code fences even when told not to.
//! Fences are stripped before a strict parse; anything that still fails to
//! parse is passed through untouched, since it may be usable prose.

use serde::{Deserialize, Deserializer};
use tracing::debug;

/// Prefix of the first line of every rendered summary.
pub const SUMMARY_PREFIX: &str = "Update summary: ";

/// Marker placed before each change line.
pub const BULLET: &str = "• ";

/// The `{summary, changes}` object requested by the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParsedSummary {
    pub summary: String,
    #[serde(default, deserialize_with = "non_empty_changes")]
    pub changes: Vec<String>,
}

/// Drops blank entries so `changes` never holds empty strings.
fn non_empty_changes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect())
}

impl ParsedSummary {
    /// Render as the chat message: summary line, then a blank line and bullets.
    pub fn render(&self) -> String {
        let mut out = format!("{}{}", SUMMARY_PREFIX, self.summary.trim());
        if !self.changes.is_empty() {
            out.push_str("\n\n");
            let bullets: Vec<String> = self
                .changes
                .iter()
                .map(|c| format!("{}{}", BULLET, c))
                .collect();
            out.push_str(&bullets.join("\n"));
        }
        out
    }
}

/// Remove a leading ```` ``` ```` / ```` ```json ```` fence and a trailing ```` ``` ```` fence.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        // Drop the optional language tag on the opening line.
        text = match rest.find('\n') {
            Some(newline) if !rest[..newline].contains('{') => &rest[newline + 1..],
            _ => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
        };
    }

    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }

    text.trim()
}

/// Parse model output into a [`ParsedSummary`], or `None` if it breaks the JSON contract.
pub fn parse_summary(raw: &str) -> Option<ParsedSummary> {
    let candidate = strip_code_fences(raw);
    match serde_json::from_str::<ParsedSummary>(candidate) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            debug!("Model output is not a summary object: {}", e);
            None
        }
    }
}

/// Turn raw model output into the final message.
///
/// Returns the rendered summary when the output parses, and the raw text
/// unchanged when it does not.
pub fn normalize_response(raw: &str) -> String {
    match parse_summary(raw) {
        Some(parsed) => parsed.render(),
        None => raw.to_string(),
    }
}
