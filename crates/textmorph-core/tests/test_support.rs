//! Shared test support utilities for integration tests

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};
use textmorph_core::{ChatClient, ChatMessage};

/// Seeded random source
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Chat client that always fails, like an unreachable endpoint
pub struct FailingClient;

impl ChatClient for FailingClient {
    fn complete(&self, _messages: &[ChatMessage]) -> anyhow::Result<String> {
        anyhow::bail!("simulated transport failure")
    }
}

/// Chat client that answers with a fixed reply and records every request
pub struct RecordingClient {
    reply: String,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl RecordingClient {
    pub fn new(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().unwrap().clone()
    }
}

impl ChatClient for RecordingClient {
    fn complete(&self, messages: &[ChatMessage]) -> anyhow::Result<String> {
        self.requests.lock().unwrap().push(messages.to_vec());
        Ok(self.reply.clone())
    }
}

/// A well-formed poem reply
pub fn poem_reply(characters: &[&str], sentences: &[&str]) -> String {
    serde_json::json!({
        "split_characters_in_order": characters,
        "sentences": sentences,
    })
    .to_string()
}
