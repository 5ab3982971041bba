//! Error types for pushcast modules using thiserror.

use thiserror::Error;

use crate::llm::Provider;

/// Errors from a single backend call.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{provider} request failed: {source}")]
    Transport {
        provider: Provider,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} API error (HTTP {status}): {body}")]
    Status {
        provider: Provider,
        status: u16,
        body: String,
    },

    #[error("{provider} returned an unreadable response: {detail}")]
    InvalidResponse { provider: Provider, detail: String },

    #[error("{0} returned no content")]
    EmptyResponse(Provider),
}

impl ProviderError {
    /// The backend that produced this error.
    pub fn provider(&self) -> Provider {
        match self {
            ProviderError::Transport { provider, .. }
            | ProviderError::Status { provider, .. }
            | ProviderError::InvalidResponse { provider, .. } => *provider,
            ProviderError::EmptyResponse(provider) => *provider,
        }
    }

    /// Short operator-facing description without response bodies.
    pub fn summary(&self) -> String {
        match self {
            ProviderError::Transport { provider, source } if source.is_timeout() => {
                format!("{} request timed out", provider)
            }
            ProviderError::Transport { provider, .. } => {
                format!("Could not reach {}", provider)
            }
            ProviderError::Status {
                provider, status, ..
            } => match *status {
                401 | 403 => format!("{} rejected the API key (HTTP {})", provider, status),
                429 => format!("Rate limited by {}", provider),
                500..=599 => format!("{} server error (HTTP {})", provider, status),
                _ => format!("{} API error (HTTP {})", provider, status),
            },
            ProviderError::InvalidResponse { provider, .. } => {
                format!("{} returned an unreadable response", provider)
            }
            ProviderError::EmptyResponse(provider) => format!("{} returned no content", provider),
        }
    }

    /// Full description including bodies, for debug logging.
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

/// Umbrella error for everything between windowing and normalization.
///
/// Never surfaces past [`crate::notify::generate_summary`], which converts it
/// into the commit-derived fallback message.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Unsupported provider '{0}'. Expected one of: openai, openrouter, gemini")]
    UnsupportedProvider(String),

    #[error("No API key configured for {0}")]
    MissingApiKey(Provider),

    #[error(transparent)]
    Backend(#[from] ProviderError),
}

impl PipelineError {
    pub fn summary(&self) -> String {
        match self {
            PipelineError::Backend(err) => err.summary(),
            other => other.to_string(),
        }
    }
}
