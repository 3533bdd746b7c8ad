//! Config file I/O: locating, reading and seeding `config.toml`.
//!
//! Nothing here validates; [`crate::load_config_from`] does that once.

mod template;

#[cfg(test)]
mod tests;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use groqchat_common::ConfigError;

use crate::schema::GroqchatConfig;

/// `<config_dir>/groqchat/config.toml`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("groqchat").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Deserialize a TOML file. Absent fields take their defaults.
pub fn read_toml(path: &Path) -> Result<GroqchatConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("{}: {e}", path.display())),
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))
}

/// Write the commented template, creating parent directories.
pub fn write_template(path: &Path) -> Result<(), ConfigError> {
    let io_error = |e: std::io::Error| ConfigError::ParseError(format!("{}: {e}", path.display()));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(path, template::default_config_toml()).map_err(io_error)
}
