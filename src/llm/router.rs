//! Provider selection and dispatch.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use crate::config::ProviderSettings;
use crate::error::{PipelineError, ProviderError};
use crate::llm::gemini::GeminiClient;
use crate::llm::openai::OpenAiClient;
use crate::llm::openrouter::OpenRouterClient;
use crate::logging::spawn_chunked_log;

/// Supported LLM providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    OpenAi,
    OpenRouter,
    Gemini,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::OpenAi, Provider::OpenRouter, Provider::Gemini];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OpenAI",
            Provider::OpenRouter => "OpenRouter",
            Provider::Gemini => "Gemini",
        }
    }

    /// Lowercase name accepted by [`Provider::from_str`].
    pub fn key(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::OpenRouter => "openrouter",
            Provider::Gemini => "gemini",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Provider::ALL
            .into_iter()
            .find(|p| p.key() == wanted)
            .ok_or_else(|| PipelineError::UnsupportedProvider(s.to_string()))
    }
}

/// A backend that turns a prompt and a system instruction into raw text.
///
/// This abstraction allows mocking the network in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn provider(&self) -> Provider;

    async fn generate(&self, prompt: &str, system: &str) -> Result<String, ProviderError>;
}

/// One configured backend adapter.
pub enum Backend {
    OpenAi(OpenAiClient),
    OpenRouter(OpenRouterClient),
    Gemini(GeminiClient),
}

impl Backend {
    /// Build an adapter using settings from the environment.
    pub fn new(provider: Provider, api_key: &str) -> Self {
        Self::with_settings(provider, api_key, ProviderSettings::from_env(provider))
    }

    pub fn with_settings(provider: Provider, api_key: &str, settings: ProviderSettings) -> Self {
        match provider {
            Provider::OpenAi => Backend::OpenAi(OpenAiClient::with_settings(api_key, settings)),
            Provider::OpenRouter => {
                Backend::OpenRouter(OpenRouterClient::with_settings(api_key, settings))
            }
            Provider::Gemini => Backend::Gemini(GeminiClient::with_settings(api_key, settings)),
        }
    }

    /// Resolve a provider name and API key into an adapter.
    ///
    /// Fails before any network access when the name is unknown or the key is
    /// missing or blank.
    pub fn from_name(name: &str, api_key: Option<&str>) -> Result<Self, PipelineError> {
        let provider: Provider = name.parse()?;
        let api_key = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(PipelineError::MissingApiKey(provider))?;
        Ok(Self::new(provider, api_key))
    }
}

#[async_trait]
impl TextGenerator for Backend {
    fn provider(&self) -> Provider {
        match self {
            Backend::OpenAi(_) => Provider::OpenAi,
            Backend::OpenRouter(_) => Provider::OpenRouter,
            Backend::Gemini(_) => Provider::Gemini,
        }
    }

    async fn generate(&self, prompt: &str, system: &str) -> Result<String, ProviderError> {
        let text = match self {
            Backend::OpenAi(client) => client.complete(prompt, system).await?,
            Backend::OpenRouter(client) => client.complete(prompt, system).await?,
            Backend::Gemini(client) => client.generate_content(prompt, system).await?,
        };

        spawn_chunked_log("raw model response", text.clone());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_providers() {
        assert_eq!("openai".parse::<Provider>().unwrap(), Provider::OpenAi);
        assert_eq!("OpenRouter".parse::<Provider>().unwrap(), Provider::OpenRouter);
        assert_eq!(" GEMINI ".parse::<Provider>().unwrap(), Provider::Gemini);
    }

    #[test]
    fn test_parse_unknown_provider() {
        let err = "mistral".parse::<Provider>().unwrap_err();
        assert!(matches!(err, PipelineError::UnsupportedProvider(ref name) if name == "mistral"));
        assert!(err.to_string().contains("Unsupported provider 'mistral'"));
    }

    #[test]
    fn test_key_round_trips_through_from_str() {
        for provider in Provider::ALL {
            assert_eq!(provider.key().parse::<Provider>().unwrap(), provider);
        }
    }

    #[test]
    fn test_from_name_rejects_unknown_before_key_check() {
        let result = Backend::from_name("anthropic", None);
        assert!(matches!(result, Err(PipelineError::UnsupportedProvider(_))));
    }

    #[test]
    fn test_from_name_requires_api_key() {
        assert!(matches!(
            Backend::from_name("openai", None),
            Err(PipelineError::MissingApiKey(Provider::OpenAi))
        ));
        assert!(matches!(
            Backend::from_name("gemini", Some("   ")),
            Err(PipelineError::MissingApiKey(Provider::Gemini))
        ));
    }

    #[test]
    fn test_from_name_builds_matching_backend() {
        let backend = Backend::from_name("openrouter", Some("sk-or-test")).unwrap();
        assert_eq!(backend.provider(), Provider::OpenRouter);
    }
}
