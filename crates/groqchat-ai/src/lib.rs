//! Chat engine for groqchat.
//!
//! Provides the Groq chat-completions client and the single-screen chat
//! session built on top of it:
//! - Streaming (SSE) support exposed as a `Stream` of chunks
//! - A three-stage pipeline: prompt template, model call, text extraction
//! - Pipeline memoization keyed by credentials
//! - Transcript and per-turn state handling

pub mod groq;
pub mod models;
pub mod pipeline;
pub mod session;
pub mod streaming;

use futures_util::stream::BoxStream;

pub use groq::{GroqClient, GroqConfig};
pub use models::{Credentials, ModelName, UnknownModel};
pub use pipeline::{
    GroqModelFactory, ModelFactory, Pipeline, PromptTemplate, TextExtractor, TextStream,
    SYSTEM_PROMPT,
};
pub use session::{ChatSession, ChatView, SessionError, Transcript, Turn, TurnPhase};

/// Stream of raw response units from a model.
pub type ChunkStream = BoxStream<'static, Result<ModelChunk, AiError>>;

/// A hosted chat model that answers with a stream of response units.
///
/// Each call issues a fresh request; the returned stream is lazy and is not
/// restartable.
pub trait ChatModel: Send + Sync {
    /// Model id sent to the provider.
    fn model_id(&self) -> &str;

    fn stream_chat(&self, messages: Vec<Message>) -> ChunkStream;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

/// One streamed response unit: an optional text delta plus metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelChunk {
    pub content: Option<String>,
    pub finish_reason: Option<String>,
    pub usage: Option<TokenUsage>,
}

impl ModelChunk {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let msg = Message::user("hi");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }

    #[test]
    fn token_usage_total_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 1,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn ai_error_display() {
        assert_eq!(AiError::RateLimited.to_string(), "Rate limited");
        assert_eq!(
            AiError::ApiError("HTTP 401 Unauthorized: invalid key".into()).to_string(),
            "API error: HTTP 401 Unauthorized: invalid key"
        );
        assert_eq!(AiError::Timeout.to_string(), "Timeout");
    }
}
