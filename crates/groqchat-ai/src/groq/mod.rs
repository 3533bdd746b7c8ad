//! Groq chat-completions client.
//!
//! Implements the `ChatModel` trait for Groq-hosted models via the
//! OpenAI-compatible endpoint (`/openai/v1/chat/completions`), always in
//! streaming mode.

mod api;
mod client;
mod config;


pub use client::GroqClient;
pub use config::{GroqConfig, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_TEMPERATURE};
