//! Model selection and per-session credentials.

use std::fmt;
use std::str::FromStr;

/// The two hosted models offered by the model selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelName {
    #[default]
    Llama33Versatile,
    Gemma2,
}

impl ModelName {
    /// Menu order; index 0 is the default selection.
    pub const ALL: [ModelName; 2] = [ModelName::Llama33Versatile, ModelName::Gemma2];

    pub fn id(self) -> &'static str {
        match self {
            ModelName::Llama33Versatile => "llama-3.3-70b-versatile",
            ModelName::Gemma2 => "gemma2-9b-it",
        }
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown model {0:?} (expected llama-3.3-70b-versatile, gemma2-9b-it, 1 or 2)")]
pub struct UnknownModel(pub String);

impl FromStr for ModelName {
    type Err = UnknownModel;

    /// Accepts a model id or its 1-based position in the menu.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| Self::ALL.get(i).copied())
                .ok_or_else(|| UnknownModel(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| UnknownModel(s.to_string()))
    }
}

/// API key plus model choice. Also the memoization key for the pipeline.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Credentials {
    pub api_key: String,
    pub model: ModelName,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, model: ModelName) -> Self {
        Self {
            api_key: api_key.into(),
            model,
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}
