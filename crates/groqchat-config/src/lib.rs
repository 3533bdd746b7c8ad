//! groqchat configuration system.
//!
//! Provides TOML-based configuration for the provider connection, the
//! terminal UI, and logging. All sections use serde defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use groqchat_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{GroqchatConfig, LoggingConfig, ProviderConfig, UiConfig, KNOWN_MODELS};

use std::path::Path;

use groqchat_common::ConfigError;
use tracing::info;

/// Load config from the platform default path.
///
/// A missing file is seeded with the commented template and the defaults
/// are returned.
pub fn load_config() -> Result<GroqchatConfig, ConfigError> {
    let path = toml_loader::config_path()?;
    match load_config_from(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            toml_loader::write_template(&path)?;
            info!("created default config at {}", path.display());
            Ok(GroqchatConfig::default())
        }
        result => result,
    }
}

/// Load and validate config from `path` (the `--config` override).
pub fn load_config_from(path: &Path) -> Result<GroqchatConfig, ConfigError> {
    let config = toml_loader::read_toml(path)?;
    validation::validate(&config)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
///
/// The API key is blanked so the output is safe to paste into bug reports.
pub fn config_to_json(config: &GroqchatConfig) -> String {
    let mut redacted = config.clone();
    if !redacted.provider.api_key.is_empty() {
        redacted.provider.api_key = "[REDACTED]".into();
    }
    serde_json::to_string_pretty(&redacted)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = GroqchatConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"provider\""));
        assert!(json.contains("\"ui\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"llama-3.3-70b-versatile\""));
    }

    #[test]
    fn config_to_json_redacts_api_key() {
        let mut config = GroqchatConfig::default();
        config.provider.api_key = "gsk_live_secret".into();
        let json = config_to_json(&config);
        assert!(!json.contains("gsk_live_secret"));
        assert!(json.contains("[REDACTED]"));
    }

    #[test]
    fn load_config_from_missing_path_is_file_not_found() {
        let err = load_config_from(Path::new("/tmp/groqchat_no_such_config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[provider]\nread_timeout_secs = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_from_accepts_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ncursor = \"|\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.ui.cursor, "|");
        assert_eq!(config.provider.default_model, "llama-3.3-70b-versatile");
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = GroqchatConfig::default();
        let json = config_to_json(&config);
        let parsed: GroqchatConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.provider.default_model, "llama-3.3-70b-versatile");
        assert_eq!(parsed.provider.read_timeout_secs, 120);
        assert_eq!(parsed.ui.cursor, "▌");
    }
}
