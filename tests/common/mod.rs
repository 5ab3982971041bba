//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::PathBuf;

use pushcast::config::ProviderSettings;
use pushcast::{Commit, PushEvent, Repository};

/// Get the path to test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get the path to a diff fixture.
pub fn diff_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("diffs").join(name)
}

/// Get the path to a provider response fixture.
pub fn response_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("responses").join(name)
}

/// Get the path to a push-event fixture.
pub fn event_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("events").join(name)
}

/// Read a fixture file as a string.
pub fn read_fixture(path: PathBuf) -> String {
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", path, e))
}

/// Load the sample push event.
pub fn push_event() -> PushEvent {
    serde_json::from_str(&read_fixture(event_fixture("push.json")))
        .expect("push.json should deserialize")
}

pub fn repository() -> Repository {
    Repository {
        name: "app".to_string(),
        full_name: "acme/app".to_string(),
        html_url: "https://github.com/acme/app".to_string(),
    }
}

pub fn commits(messages: &[&str]) -> Vec<Commit> {
    messages.iter().map(|m| Commit::new(*m)).collect()
}

/// Settings pointing an adapter at a mock server.
pub fn mock_settings(base_url: &str, model: &str) -> ProviderSettings {
    ProviderSettings::new(base_url, model)
}
