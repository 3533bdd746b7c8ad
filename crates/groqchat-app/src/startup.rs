//! Startup resolution: config, initial model, initial API key, and session
//! wiring.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use groqchat_ai::{ChatSession, GroqModelFactory, ModelName};
use groqchat_common::ConfigError;
use groqchat_config::{GroqchatConfig, ProviderConfig};
use tracing::warn;

/// An explicit path must load. The default path falls back to defaults and
/// hands back the error so it can be logged once logging is up.
pub fn load_settings(
    explicit: Option<&Path>,
) -> groqchat_common::Result<(GroqchatConfig, Option<ConfigError>)> {
    if let Some(path) = explicit {
        return Ok((groqchat_config::load_config_from(path)?, None));
    }
    Ok(match groqchat_config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (GroqchatConfig::default(), Some(e)),
    })
}

/// `--model` wins over `provider.default_model`; an unusable config value
/// falls back to the first model.
pub fn resolve_model(cli: Option<&str>, provider: &ProviderConfig) -> anyhow::Result<ModelName> {
    if let Some(value) = cli {
        return value
            .parse()
            .with_context(|| format!("invalid --model value {value:?}"));
    }
    Ok(provider.default_model.parse().unwrap_or_else(|e| {
        warn!("{e}; using {}", ModelName::default());
        ModelName::default()
    }))
}

/// A non-empty `GROQ_API_KEY` wins over `provider.api_key`.
pub fn resolve_api_key(env_value: Option<String>, provider: &ProviderConfig) -> String {
    env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| provider.api_key.trim().to_string())
}

pub fn build_session(config: &GroqchatConfig, api_key: String, model: ModelName) -> ChatSession {
    let provider = &config.provider;
    let factory = GroqModelFactory::new()
        .with_base_url(provider.base_url.clone())
        .with_timeouts(
            Duration::from_secs(provider.connect_timeout_secs.into()),
            Duration::from_secs(provider.read_timeout_secs.into()),
        );

    let mut session = ChatSession::new(factory).with_cursor(config.ui.cursor.clone());
    session.set_credentials(api_key, model);
    session
}
