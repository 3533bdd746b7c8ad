//! Session types: transcript, turn phases, errors, and the display seam.

use crate::{AiError, Message, Role};

/// Marker drawn after the in-flight reply while it streams.
pub const DEFAULT_CURSOR: &str = "▌";

/// One role-tagged transcript entry (`user` or `assistant`).
pub type Turn = Message;

/// Ordered, append-only record of the displayed conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(Message {
            role: Role::User,
            content: content.into(),
        });
    }

    pub(crate) fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(Message {
            role: Role::Assistant,
            content: content.into(),
        });
    }

    pub(crate) fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}

/// Where a turn is in its lifecycle.
///
/// `Idle → UserAppended → Streaming → Completed | Failed → Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    #[default]
    Idle,
    UserAppended,
    Streaming,
    Completed,
    Failed,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("question is empty")]
    EmptyQuestion,

    #[error(transparent)]
    Provider(#[from] AiError),
}

/// The display surface a session draws on.
pub trait ChatView {
    /// Full refresh: drop whatever is shown and draw these turns.
    fn render_transcript(&mut self, turns: &[Turn]);

    /// A user turn was appended.
    fn show_user_turn(&mut self, content: &str);

    /// Replace the live region with `rendered` (reply so far plus cursor).
    fn update_live(&mut self, rendered: &str);

    /// Draw the finished reply without the cursor and close the live region.
    fn finish_live(&mut self, content: &str);

    /// Surface a failed turn. `message` is the error's display string.
    fn show_error(&mut self, message: &str);

    /// Guidance shown while no API key is set.
    fn show_missing_key(&mut self);

    fn on_phase(&mut self, _phase: TurnPhase) {}
}
