//! Adapter A: OpenAI chat completions through a small hosted-model client.

use reqwest::Client;
use tracing::debug;

use crate::config::ProviderSettings;
use crate::error::ProviderError;
use crate::llm::Provider;
use crate::llm::chat::{ChatRequest, ChatResponse, decode, read_body};

/// Output token budget for a summary.
pub const MAX_TOKENS: u32 = 2000;
pub const TEMPERATURE: f32 = 0.7;

/// Minimal OpenAI client exposing the chat-completions call.
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    settings: ProviderSettings,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_settings(api_key, ProviderSettings::from_env(Provider::OpenAi))
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

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.settings.base_url)
    }

    async fn create_chat_completion(
        &self,
        request: &ChatRequest<'_>,
    ) -> Result<ChatResponse, ProviderError> {
        let provider = Provider::OpenAi;

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|source| ProviderError::Transport { provider, source })?;

        let body = read_body(provider, response).await?;
        decode(provider, &body)
    }

    /// Run one completion and return the trimmed text of the first choice.
    pub async fn complete(&self, prompt: &str, system: &str) -> Result<String, ProviderError> {
        debug!("Calling OpenAI model {}", self.model());

        let mut request = ChatRequest::new(self.model(), system, prompt);
        request.max_tokens = Some(MAX_TOKENS);
        request.temperature = Some(TEMPERATURE);

        self.create_chat_completion(&request)
            .await?
            .first_text(Provider::OpenAi)
    }
}
