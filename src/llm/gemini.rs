//! Adapter C: Gemini `generateContent`.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ProviderSettings;
use crate::error::ProviderError;
use crate::llm::Provider;
use crate::llm::chat::{decode, read_body};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated, trimmed text of the first candidate.
    fn text(self) -> Result<String, ProviderError> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(ProviderError::EmptyResponse(Provider::Gemini));
        }
        Ok(text.to_string())
    }
}

pub struct GeminiClient {
    http: Client,
    api_key: String,
    settings: ProviderSettings,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_settings(api_key, ProviderSettings::from_env(Provider::Gemini))
    }

    pub fn with_settings(api_key: impl Into<String>, settings: ProviderSettings) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            settings,
        }
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    /// Single-shot generate call; returns the trimmed response text.
    pub async fn generate_content(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<String, ProviderError> {
        let provider = Provider::Gemini;
        let url = format!(
            "{}/models/{}:generateContent",
            self.settings.base_url,
            self.model()
        );

        debug!("Calling Gemini model {}", self.model());

        let request = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: system }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|source| ProviderError::Transport { provider, source })?;

        let body = read_body(provider, response).await?;
        decode::<GenerateResponse>(provider, &body)?.text()
    }
}
