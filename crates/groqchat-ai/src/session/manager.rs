//! ChatSession struct, credential handling, and pipeline memoization.

use std::sync::Arc;

use tracing::debug;

use crate::pipeline::{
    GroqModelFactory, ModelFactory, Pipeline, PromptTemplate, TextExtractor,
};
use crate::{AiError, Credentials, ModelName};

use super::types::{ChatView, Transcript, TurnPhase, DEFAULT_CURSOR};

struct CachedPipeline {
    key: Credentials,
    pipeline: Arc<Pipeline>,
}

/// Per-session state: transcript, credentials, and the memoized pipeline.
pub struct ChatSession {
    pub(super) transcript: Transcript,
    credentials: Credentials,
    cached: Option<CachedPipeline>,
    factory: Box<dyn ModelFactory>,
    prompt: PromptTemplate,
    pub(super) cursor: String,
    pub(super) phase: TurnPhase,
}

impl ChatSession {
    pub fn new(factory: impl ModelFactory + 'static) -> Self {
        Self {
            transcript: Transcript::new(),
            credentials: Credentials::default(),
            cached: None,
            factory: Box::new(factory),
            prompt: PromptTemplate::default(),
            cursor: DEFAULT_CURSOR.to_string(),
            phase: TurnPhase::Idle,
        }
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = cursor.into();
        self
    }

    /// Replace the credentials. The cached pipeline is dropped when either
    /// field differs from the current value.
    pub fn set_credentials(&mut self, api_key: impl Into<String>, model: ModelName) {
        let next = Credentials::new(api_key, model);
        if next != self.credentials {
            debug!(model = %next.model, has_key = next.has_api_key(), "credentials changed");
            self.cached = None;
            self.credentials = next;
        }
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        let model = self.credentials.model;
        self.set_credentials(api_key, model);
    }

    pub fn set_model(&mut self, model: ModelName) {
        let api_key = self.credentials.api_key.clone();
        self.set_credentials(api_key, model);
    }

    /// The pipeline for the current credentials, or `None` while the API key
    /// is empty.
    ///
    /// Unchanged credentials return the same instance without touching the
    /// factory.
    pub fn build_pipeline(&mut self) -> Result<Option<Arc<Pipeline>>, AiError> {
        if !self.credentials.has_api_key() {
            return Ok(None);
        }

        if let Some(ref cached) = self.cached {
            if cached.key == self.credentials {
                return Ok(Some(Arc::clone(&cached.pipeline)));
            }
        }

        debug!(model = %self.credentials.model, "building pipeline");
        let model = self.factory.build(&self.credentials)?;
        let pipeline = Arc::new(Pipeline::new(
            self.prompt.clone(),
            model,
            TextExtractor,
        ));
        self.cached = Some(CachedPipeline {
            key: self.credentials.clone(),
            pipeline: Arc::clone(&pipeline),
        });
        Ok(Some(pipeline))
    }

    /// Whether a question can be submitted right now.
    pub fn has_pipeline(&self) -> bool {
        self.credentials.has_api_key()
    }

    /// Empty the transcript and redraw. Credentials and the cached pipeline
    /// are kept.
    pub fn clear(&mut self, view: &mut dyn ChatView) {
        self.transcript.clear();
        view.render_transcript(self.transcript.turns());
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    pub(super) fn enter(&mut self, phase: TurnPhase, view: &mut dyn ChatView) {
        self.phase = phase;
        view.on_phase(phase);
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(GroqModelFactory::default())
    }
}
