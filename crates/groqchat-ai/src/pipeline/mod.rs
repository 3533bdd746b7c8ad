//! The answer-generating pipeline.
//!
//! Three stages run in order for every question: the prompt template
//! renders `[system, user]`, the chat model streams response units, and
//! the text extractor keeps only their text.

mod factory;
mod parser;
mod prompt;

pub use factory::{GroqModelFactory, ModelFactory};
pub use parser::TextExtractor;
pub use prompt::{PromptTemplate, SYSTEM_PROMPT};

use std::sync::Arc;

use futures_util::stream::BoxStream;
use futures_util::{future, StreamExt, TryStreamExt};

use crate::{AiError, ChatModel};

/// Lazy sequence of text chunks produced by one pipeline run.
pub type TextStream = BoxStream<'static, Result<String, AiError>>;

/// Prompt template, remote model and text extractor, composed once and
/// reused for sequential turns.
pub struct Pipeline {
    prompt: PromptTemplate,
    model: Arc<dyn ChatModel>,
    extractor: TextExtractor,
}

impl Pipeline {
    pub fn new(prompt: PromptTemplate, model: Arc<dyn ChatModel>, extractor: TextExtractor) -> Self {
        Self {
            prompt,
            model,
            extractor,
        }
    }

    pub fn model(&self) -> &Arc<dyn ChatModel> {
        &self.model
    }

    /// Run the pipeline over a single question.
    ///
    /// Nothing is sent until the stream is polled; every call issues a new
    /// remote request.
    pub fn stream(&self, question: &str) -> TextStream {
        let messages = self.prompt.render(question);
        let extractor = self.extractor;
        self.model
            .stream_chat(messages)
            .try_filter_map(move |chunk| future::ready(Ok(extractor.extract(chunk))))
            .boxed()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("prompt", &self.prompt)
            .field("model", &self.model.model_id())
            .field("extractor", &self.extractor)
            .finish()
    }
}
