//! Chat-completion client used by the generative strategies
//!
//! The [`ChatClient`] trait is the only seam between a strategy and the
//! network. [`OpenAiChatClient`] speaks the OpenAI-compatible protocol;
//! tests swap in deterministic stubs.

pub mod client;
pub mod config;
pub mod reply;

pub use client::OpenAiChatClient;
pub use config::LlmConfig;
pub use reply::parse_lenient;

use serde::{Deserialize, Serialize};

/// Message role enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// Message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// A blocking, single-shot chat completion
///
/// Implementations send `messages` as one non-streaming request and return
/// the reply text. They make exactly one attempt. The call blocks, so async
/// code should invoke it from a blocking task.
pub trait ChatClient: Send + Sync {
    fn complete(&self, messages: &[ChatMessage]) -> anyhow::Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let message = ChatMessage::system("persona");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "persona");
    }

    #[test]
    fn test_message_roundtrip() {
        let message: ChatMessage =
            serde_json::from_str(r#"{"role":"assistant","content":"hi"}"#).unwrap();
        assert_eq!(message.role, MessageRole::Assistant);
        assert_eq!(message.content, "hi");
    }
}
