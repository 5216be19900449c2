use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::config::SelectorConfig;
use crate::error::ConfigError;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("response contains no message content")]
    MissingContent,
}

/// Chat-completion client consulted at most once per selection call.
///
/// Implementations must be safe to share across concurrent selection
/// calls; the selector holds one instance behind an `Arc`.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends one system/user message pair and returns the raw text of the
    /// first generated message.
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f64,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// HTTP client for an OpenAI-style chat-completion endpoint.
///
/// Model, temperature, endpoint and both timeouts are fixed at
/// construction; a timed-out or failed request surfaces as a transport
/// error and is never retried here.
#[derive(Debug)]
pub struct HttpLlmClient {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
    model: String,
    temperature: f64,
}

impl HttpLlmClient {
    pub fn new(config: &SelectorConfig, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(&config.api_url).map_err(|source| ConfigError::InvalidApiUrl {
            url: config.api_url.clone(),
            source,
        })?;
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl LlmClient for HttpLlmClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(LlmError::Status { status, body });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::MissingContent)?;
        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_wire_shape() {
        let request = ChatRequest {
            model: "grok-3",
            temperature: 0.1,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "pick a plan",
                },
                ChatMessage {
                    role: "user",
                    content: "Plan 0: Score = 1.00",
                },
            ],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "grok-3");
        assert_eq!(value["temperature"], 0.1);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "Plan 0: Score = 1.00");
    }

    #[test]
    fn response_content_extraction() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"2"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "2");

        let empty = r#"{"choices":[]}"#;
        let parsed: ChatResponse = serde_json::from_str(empty).unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn rejects_invalid_endpoint() {
        let config = SelectorConfig {
            api_url: "not a url".into(),
            ..SelectorConfig::default()
        };
        let err = HttpLlmClient::new(&config, "key").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidApiUrl { .. }));
    }

    #[test]
    fn builds_with_default_config() {
        let client = HttpLlmClient::new(&SelectorConfig::default(), "key");
        assert!(client.is_ok());
    }
}
