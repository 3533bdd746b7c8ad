//! Configuration schema types for groqchat.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod provider;
mod ui;

pub use logging::*;
pub use provider::*;
pub use ui::*;

use serde::{Deserialize, Serialize};

/// Root configuration for groqchat.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GroqchatConfig {
    pub provider: ProviderConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}
