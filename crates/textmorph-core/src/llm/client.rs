//! OpenAI-compatible chat-completions client

use super::{ChatClient, ChatMessage, LlmConfig};
use crate::error::{Error, Result};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// Blocking client for `POST {base_url}/chat/completions`
///
/// Every call builds its own HTTP client and a current-thread runtime, so
/// concurrent callers share no connection state.
///
/// `complete` blocks the calling thread. Called from inside a Tokio runtime it
/// returns `Error::Unsupported` instead of blocking; async callers should run
/// it through `tokio::task::spawn_blocking`.
#[derive(Debug, Clone)]
pub struct OpenAiChatClient {
    config: LlmConfig,
}

impl OpenAiChatClient {
    /// Create a client after validating `config`
    pub fn new(config: LlmConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a client from `TEXTMORPH_LLM_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(LlmConfig::from_env()?)
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    async fn send(&self, messages: &[ChatMessage]) -> Result<String> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = self.config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| Error::Http {
            message: format!("Failed to create HTTP client: {}", e),
            status_code: None,
            source: Some(e.into()),
        })?;

        let endpoint = self.config.endpoint();
        debug!(endpoint = %endpoint, model = %self.config.model, messages = messages.len(), "sending chat completion request");

        let response = client
            .post(&endpoint)
            .bearer_auth(self.config.api_key.as_deref().unwrap_or_default())
            .json(&build_request_body(&self.config.model, messages))
            .send()
            .await
            .map_err(|e| Error::Http {
                message: format!("Request to {} failed: {}", endpoint, e),
                status_code: e.status().map(|s| s.as_u16()),
                source: Some(e.into()),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| Error::Http {
            message: format!("Failed to read response body: {}", e),
            status_code: Some(status.as_u16()),
            source: Some(e.into()),
        })?;

        if !status.is_success() {
            return Err(Error::Http {
                message: format!("Chat completion request returned {}", status),
                status_code: Some(status.as_u16()),
                source: None,
            });
        }

        let value: Value = serde_json::from_str(&body)?;
        extract_content(&value)
    }
}

impl ChatClient for OpenAiChatClient {
    fn complete(&self, messages: &[ChatMessage]) -> anyhow::Result<String> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(Error::Unsupported {
                message: "Blocking chat completion called from inside an async runtime".to_string(),
                feature: Some("blocking".to_string()),
            }
            .into());
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::Unsupported {
                message: format!("Failed to create runtime: {}", e),
                feature: Some("blocking".to_string()),
            })?;

        Ok(runtime.block_on(self.send(messages))?)
    }
}

/// Non-streaming request body
pub fn build_request_body(model: &str, messages: &[ChatMessage]) -> Value {
    json!({
        "model": model,
        "messages": messages,
        "stream": false,
    })
}

/// Reply text at `choices[0].message.content`
pub fn extract_content(response: &Value) -> Result<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::Unsupported {
            message: "Response has no choices[0].message.content text".to_string(),
            feature: Some("chat_completion".to_string()),
        })
}
