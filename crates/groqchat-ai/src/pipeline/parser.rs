//! Text extraction stage.

use crate::ModelChunk;

/// Keeps the text of a response unit and discards everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl TextExtractor {
    /// `None` for units without text (role headers, finish markers, usage).
    pub fn extract(&self, chunk: ModelChunk) -> Option<String> {
        chunk.content.filter(|text| !text.is_empty())
    }
}
