//! Hosted model provider connection settings.

use serde::{Deserialize, Serialize};

/// Model ids offered by the model selector, in menu order.
pub const KNOWN_MODELS: [&str; 2] = ["llama-3.3-70b-versatile", "gemma2-9b-it"];

/// Provider configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Fallback API key. `GROQ_API_KEY` in the environment wins over this.
    pub api_key: String,
    pub base_url: String,
    /// One of [`KNOWN_MODELS`].
    pub default_model: String,
    /// Valid range: 1-120.
    pub connect_timeout_secs: u32,
    /// Longest silence allowed between streamed chunks. Valid range: 1-600.
    pub read_timeout_secs: u32,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("default_model", &self.default_model)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("read_timeout_secs", &self.read_timeout_secs)
            .finish()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.groq.com".into(),
            default_model: KNOWN_MODELS[0].into(),
            connect_timeout_secs: 10,
            read_timeout_secs: 120,
        }
    }
}
