// src/assistant/mod.rs
//! Forwards free-text RAPID questions to a chat-completion model.

pub mod openai;

use crate::error::{AssistantError, Result};
use serde::Serialize;
use std::future::Future;
use tracing::{info, instrument};

pub use openai::OpenAiBackend;

pub const SYSTEM_PROMPT: &str = "You are an expert in ABB RAPID robotics programming language. \
Help users understand and modify their RAPID code. Provide clear, practical explanations and examples.";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String, // "system", "user", "assistant"
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

/// One round trip to a chat model: messages in, text of the first choice out.
pub trait ChatBackend {
    fn complete(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
    ) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Debug)]
pub struct Assistant<B> {
    backend: B,
    api_key: Option<String>,
}

impl<B: ChatBackend> Assistant<B> {
    pub fn new(backend: B, api_key: Option<String>) -> Self {
        // Blank keys are treated the same as a missing one.
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        Self { backend, api_key }
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends `question` with the fixed RAPID persona. No history is kept between calls.
    #[instrument(skip_all)]
    pub async fn ask(&self, question: &str) -> std::result::Result<String, AssistantError> {
        let api_key = self.api_key.as_deref().ok_or(AssistantError::MissingApiKey)?;
        let messages = [ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(question)];

        info!("Forwarding question to AI backend");
        self.backend
            .complete(api_key, &messages)
            .await
            .map_err(|e| AssistantError::Request(e.context("AI request failed")))
    }
}
