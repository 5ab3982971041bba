//! Per-provider endpoint and model settings.

use std::env;

use tracing::warn;

use crate::llm::Provider;

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const OPENAI_MODEL: &str = "gpt-4o-mini";

const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
const OPENROUTER_MODEL: &str = "openai/gpt-4o-mini";

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Where a backend is reached and which model it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub base_url: String,
    pub model: String,
}

impl ProviderSettings {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    /// Built-in defaults for a provider.
    pub fn defaults(provider: Provider) -> Self {
        match provider {
            Provider::OpenAi => Self::new(OPENAI_BASE_URL, OPENAI_MODEL),
            Provider::OpenRouter => Self::new(OPENROUTER_BASE_URL, OPENROUTER_MODEL),
            Provider::Gemini => Self::new(GEMINI_BASE_URL, GEMINI_MODEL),
        }
    }

    /// Defaults, overridden by `PUSHCAST_<PROVIDER>_BASE_URL` and `PUSHCAST_<PROVIDER>_MODEL`.
    ///
    /// A variable that is set but blank is ignored with a warning.
    pub fn from_env(provider: Provider) -> Self {
        let defaults = Self::defaults(provider);
        let prefix = env_prefix(provider);

        let base_url = read_override(&format!("{prefix}_BASE_URL"), &defaults.base_url);
        let model = read_override(&format!("{prefix}_MODEL"), &defaults.model);

        Self::new(base_url, model)
    }
}

fn env_prefix(provider: Provider) -> &'static str {
    match provider {
        Provider::OpenAi => "PUSHCAST_OPENAI",
        Provider::OpenRouter => "PUSHCAST_OPENROUTER",
        Provider::Gemini => "PUSHCAST_GEMINI",
    }
}

fn read_override(var: &str, default: &str) -> String {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        Ok(_) => {
            warn!("{} is set but empty, using default '{}'", var, default);
            default.to_string()
        }
        Err(_) => default.to_string(),
    }
}
