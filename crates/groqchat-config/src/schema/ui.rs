//! Terminal UI configuration types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Print the example prompts under the banner at startup.
    pub show_examples: bool,
    /// Marker drawn after the in-flight reply while it streams.
    pub cursor: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_examples: true,
            cursor: "▌".into(),
        }
    }
}
