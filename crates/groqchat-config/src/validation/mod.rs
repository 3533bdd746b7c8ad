//! Full configuration validation.
//!
//! Validates numeric ranges and string formats, collecting every error into
//! a single `ConfigError`.

mod helpers;


use crate::schema::{GroqchatConfig, KNOWN_MODELS};
use groqchat_common::ConfigError;

use helpers::validate_range;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GroqchatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_provider(&mut errors, config);
    validate_ui(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_provider(errors: &mut Vec<String>, config: &GroqchatConfig) {
    let provider = &config.provider;

    validate_range(
        errors,
        "provider.connect_timeout_secs",
        provider.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "provider.read_timeout_secs",
        provider.read_timeout_secs,
        1,
        600,
    );

    if !KNOWN_MODELS.contains(&provider.default_model.as_str()) {
        errors.push(format!(
            "provider.default_model = {:?} is not one of {}",
            provider.default_model,
            KNOWN_MODELS.join(", ")
        ));
    }

    if !(provider.base_url.starts_with("http://") || provider.base_url.starts_with("https://")) {
        errors.push(format!(
            "provider.base_url = {:?} must start with http:// or https://",
            provider.base_url
        ));
    }
}

fn validate_ui(errors: &mut Vec<String>, config: &GroqchatConfig) {
    if config.ui.cursor.is_empty() {
        errors.push("ui.cursor must not be empty".into());
    }
}
