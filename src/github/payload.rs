//! Push-event payload types.
//!
//! Only the fields the notification pipeline reads are modelled; everything
//! else in the webhook body is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Author block of a pushed commit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitAuthor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// A pushed commit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Commit {
    #[serde(default)]
    pub id: Option<String>,
    pub message: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

impl Commit {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// First line of the message.
    pub fn title(&self) -> &str {
        self.message.lines().next().unwrap_or("").trim()
    }

    /// Everything after the title, with surrounding blank lines removed.
    pub fn body(&self) -> Option<&str> {
        let (_, rest) = self.message.split_once('\n')?;
        let rest = rest.trim();
        if rest.is_empty() { None } else { Some(rest) }
    }
}

/// Repository the push landed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
}

/// The subset of a push webhook the pipeline consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct PushEvent {
    #[serde(default)]
    pub commits: Vec<Commit>,
    pub repository: Repository,
    /// Compare URL for the pushed range. Falls back to the repository page.
    #[serde(default)]
    pub compare: Option<String>,
}

impl PushEvent {
    pub fn compare_url(&self) -> &str {
        self.compare
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(&self.repository.html_url)
    }
}
