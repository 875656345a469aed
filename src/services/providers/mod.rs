/// Chat completion provider abstraction
///
/// The recommendation pipeline only needs one thing from an LLM vendor: send
/// an ordered list of role/content messages, get raw text back. Keeping that
/// behind a trait lets tests script replies and keeps vendor wire formats out
/// of the core.
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

pub mod openai;

pub use openai::OpenAiProvider;

/// A single chat message in provider wire order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Trait for hosted chat completion providers
///
/// A failed call is a hard failure and propagates; interpreting a successful
/// reply is the caller's problem. Implementations must not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends the messages and returns the raw text content of the first choice
    async fn complete(&self, messages: &[ChatMessage]) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
