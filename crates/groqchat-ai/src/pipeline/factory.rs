//! Construction of the remote model stage from credentials.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::groq::{GroqClient, GroqConfig, DEFAULT_BASE_URL, DEFAULT_TEMPERATURE};
use crate::{AiError, ChatModel, Credentials};

/// Builds the chat model a pipeline calls. Invoked only when the cached
/// pipeline is missing or stale.
pub trait ModelFactory: Send + Sync {
    fn build(&self, credentials: &Credentials) -> Result<Arc<dyn ChatModel>, AiError>;
}

/// Builds Groq clients with temperature 0.7 and streaming enabled.
#[derive(Debug, Clone)]
pub struct GroqModelFactory {
    base_url: String,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl GroqModelFactory {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(120),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self
    }
}

impl Default for GroqModelFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelFactory for GroqModelFactory {
    fn build(&self, credentials: &Credentials) -> Result<Arc<dyn ChatModel>, AiError> {
        debug!(model = %credentials.model, base_url = %self.base_url, "building Groq client");
        let config = GroqConfig::new(credentials.api_key.clone())
            .with_model(credentials.model.id())
            .with_temperature(DEFAULT_TEMPERATURE)
            .with_base_url(self.base_url.clone())
            .with_connect_timeout(self.connect_timeout)
            .with_read_timeout(self.read_timeout);
        Ok(Arc::new(GroqClient::new(config)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelName;

    #[test]
    fn builds_client_for_selected_model() {
        let factory = GroqModelFactory::new().with_base_url("http://localhost:1");
        let model = factory
            .build(&Credentials::new("gsk_x", ModelName::Gemma2))
            .unwrap();
        assert_eq!(model.model_id(), "gemma2-9b-it");
    }
}
