//! Acrostic poems written by a chat model
//!
//! The input's Chinese characters (or, for input without any, its ASCII
//! letters) become the first characters of the poem's lines. The model is
//! asked for a JSON object; its `sentences` array is joined with newlines.
//!
//! A failed request or an unparseable reply is replaced with a sentinel
//! object whose only sentence is [`ERROR_SENTINEL`], so the caller receives
//! that marker instead of an error. A reply that parses but has no
//! `sentences` array is a [`TransformError::MissingField`].

pub mod prompts;

use super::{Transform, TransformResult};
use crate::classify::{contains_chinese_or_english, extract_language_chars, Language};
use crate::error::TransformError;
use crate::llm::{parse_lenient, ChatClient, ChatMessage};
use rand::RngCore;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Marker returned in place of a poem when the model call fails
pub const ERROR_SENTINEL: &str = "$error$";

const SENTENCES_FIELD: &str = "sentences";

/// Payload used when no usable reply was obtained
pub fn sentinel_payload() -> Value {
    json!({
        "split_characters_in_order": [ERROR_SENTINEL],
        "sentences": [ERROR_SENTINEL],
    })
}

/// Acrostic poem strategy backed by an injected [`ChatClient`]
#[derive(Clone)]
pub struct AcrosticPoem {
    client: Arc<dyn ChatClient>,
}

impl std::fmt::Debug for AcrosticPoem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcrosticPoem").finish_non_exhaustive()
    }
}

impl AcrosticPoem {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    /// The system and user messages for `input`
    pub fn build_messages(input: &str) -> Vec<ChatMessage> {
        let language = Language::detect(input);
        let characters = extract_language_chars(input, language);
        vec![
            ChatMessage::system(prompts::system_prompt(language)),
            ChatMessage::user(prompts::user_prompt(language, input, &characters)),
        ]
    }

    /// Validation without a client: the input has Chinese or English letters
    pub fn accepts(input: &str) -> bool {
        contains_chinese_or_english(input)
    }

    /// Ask the model, falling back to [`sentinel_payload`] on any failure
    fn request_payload(&self, input: &str) -> Value {
        let messages = Self::build_messages(input);
        debug!(
            language = Language::detect(input).code(),
            "requesting acrostic poem"
        );

        let reply = match self.client.complete(&messages) {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "chat completion failed, using error sentinel");
                return sentinel_payload();
            }
        };

        match parse_lenient(&reply) {
            Some(payload) => payload,
            None => {
                warn!(reply_chars = reply.chars().count(), "reply is not JSON, using error sentinel");
                sentinel_payload()
            }
        }
    }
}

/// Join the `sentences` array of `payload` with newlines
pub fn join_sentences(payload: &Value) -> TransformResult<String> {
    let sentences = payload
        .get(SENTENCES_FIELD)
        .and_then(Value::as_array)
        .ok_or_else(|| TransformError::missing_field(SENTENCES_FIELD))?;

    let lines = sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            sentence.as_str().ok_or_else(|| TransformError::InvalidField {
                field: SENTENCES_FIELD.to_string(),
                reason: format!("element {} is not a string", i),
            })
        })
        .collect::<TransformResult<Vec<_>>>()?;

    Ok(lines.join("\n"))
}

impl Transform for AcrosticPoem {
    fn name(&self) -> &'static str {
        "acrostic-poem"
    }

    fn validate(&self, input: &str) -> bool {
        Self::accepts(input)
    }

    fn transform(&self, input: &str, _rng: &mut dyn RngCore) -> TransformResult<String> {
        join_sentences(&self.request_payload(input))
    }
}
