//! Groq API client struct, request building, and stream payload parsing.

use crate::{AiError, Message, ModelChunk, TokenUsage};

use super::config::GroqConfig;

pub(crate) const CHAT_COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";
/// Data payload that terminates a chat-completions stream.
pub(crate) const DONE_SENTINEL: &str = "[DONE]";

/// Groq API client.
pub struct GroqClient {
    pub(crate) config: GroqConfig,
    pub(crate) http: reqwest::Client,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        )
    }

    /// Build the JSON request body for a streaming chat completion.
    pub fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        let msgs: Vec<_> = messages
            .iter()
            .map(|msg| {
                serde_json::json!({
                    "role": msg.role.as_str(),
                    "content": msg.content,
                })
            })
            .collect();

        serde_json::json!({
            "model": self.config.model,
            "messages": msgs,
            "temperature": self.config.temperature,
            "stream": true,
        })
    }
}

/// Parse one `data:` payload of a chat-completions stream.
///
/// An in-band `{"error": ...}` object is reported as `AiError::ApiError`.
pub(crate) fn parse_stream_payload(data: &str) -> Result<ModelChunk, AiError> {
    let json: serde_json::Value =
        serde_json::from_str(data).map_err(|e| AiError::ParseError(e.to_string()))?;

    if let Some(error) = json.get("error").filter(|e| !e.is_null()) {
        let message = error["message"]
            .as_str()
            .map(String::from)
            .unwrap_or_else(|| error.to_string());
        return Err(AiError::ApiError(message));
    }

    let choice = &json["choices"][0];
    let content = choice["delta"]["content"].as_str().map(String::from);
    let finish_reason = choice["finish_reason"].as_str().map(String::from);

    // Groq reports usage under `x_groq` on the final chunk.
    let usage = json["x_groq"]
        .get("usage")
        .or_else(|| json.get("usage"))
        .filter(|u| u.is_object())
        .map(|u| TokenUsage {
            input_tokens: u["prompt_tokens"].as_u64().unwrap_or(0),
            output_tokens: u["completion_tokens"].as_u64().unwrap_or(0),
        });

    Ok(ModelChunk {
        content,
        finish_reason,
        usage,
    })
}
