//! Chat-completions wire types shared by the OpenAI and OpenRouter adapters.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ProviderError;
use crate::llm::Provider;
use crate::logging::spawn_chunked_log;

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatRequest<'a> {
    /// One system message followed by one user message.
    pub fn new(model: &'a str, system: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: None,
            temperature: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Trimmed text of the first choice.
    pub fn first_text(self, provider: Provider) -> Result<String, ProviderError> {
        let text = self
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ProviderError::EmptyResponse(provider));
        }
        Ok(text)
    }
}

/// Read a response body, turning non-2xx statuses into [`ProviderError::Status`].
pub(crate) async fn read_body(
    provider: Provider,
    response: reqwest::Response,
) -> Result<String, ProviderError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("{} responded with HTTP {}", provider, status.as_u16());
        spawn_chunked_log("provider error body", body.clone());
        return Err(ProviderError::Status {
            provider,
            status: status.as_u16(),
            body,
        });
    }

    response
        .text()
        .await
        .map_err(|source| ProviderError::Transport { provider, source })
}

/// Decode a JSON body, keeping a truncated copy of it in the error.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(
    provider: Provider,
    body: &str,
) -> Result<T, ProviderError> {
    serde_json::from_str(body).map_err(|e| ProviderError::InvalidResponse {
        provider,
        detail: format!(
            "{}. Body: {}",
            e,
            body.chars().take(200).collect::<String>()
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_system_then_user() {
        let mut request = ChatRequest::new("gpt-4o-mini", "sys", "user prompt");
        request.max_tokens = Some(2000);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "sys");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "user prompt");
        assert_eq!(json["max_tokens"], 2000);
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn test_first_text_trims() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"  hi \n"}}]}"#).unwrap();
        assert_eq!(response.first_text(Provider::OpenAi).unwrap(), "hi");
    }

    #[test]
    fn test_first_text_no_choices_is_empty_response() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            response.first_text(Provider::OpenRouter),
            Err(ProviderError::EmptyResponse(Provider::OpenRouter))
        ));
    }

    #[test]
    fn test_first_text_null_content_is_empty_response() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert!(response.first_text(Provider::OpenAi).is_err());
    }

    #[test]
    fn test_decode_error_keeps_body_excerpt() {
        let err = decode::<ChatResponse>(Provider::OpenAi, "<html>bad gateway</html>").unwrap_err();
        match err {
            ProviderError::InvalidResponse { provider, detail } => {
                assert_eq!(provider, Provider::OpenAi);
                assert!(detail.contains("bad gateway"));
            }
            other => panic!("Expected InvalidResponse, got {:?}", other),
        }
    }
}
