//! Adapter B: OpenRouter over raw HTTP.

use reqwest::Client;
use tracing::debug;

use crate::config::ProviderSettings;
use crate::error::ProviderError;
use crate::llm::Provider;
use crate::llm::chat::{ChatRequest, ChatResponse, decode, read_body};

/// Identifying headers OpenRouter uses for app attribution.
pub const REFERER: &str = "https://pushcast.app";
pub const TITLE: &str = "Pushcast";

pub struct OpenRouterClient {
    http: Client,
    api_key: String,
    settings: ProviderSettings,
}

impl OpenRouterClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_settings(api_key, ProviderSettings::from_env(Provider::OpenRouter))
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

    /// POST the prompt and return the trimmed text of the first choice.
    ///
    /// A non-2xx status is read in full and returned as [`ProviderError::Status`].
    pub async fn complete(&self, prompt: &str, system: &str) -> Result<String, ProviderError> {
        let provider = Provider::OpenRouter;
        let url = format!("{}/chat/completions", self.settings.base_url);

        debug!("Calling OpenRouter model {}", self.model());

        let request = ChatRequest::new(self.model(), system, prompt);

        let response = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", REFERER)
            .header("X-Title", TITLE)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|source| ProviderError::Transport { provider, source })?;

        let body = read_body(provider, response).await?;
        decode::<ChatResponse>(provider, &body)?.first_text(provider)
    }
}
