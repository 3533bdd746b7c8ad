//! Chat session management.
//!
//! A `ChatSession` holds the displayed transcript, the user's credentials,
//! and the pipeline memoized for those credentials, and runs one streamed
//! turn per submitted question.

mod chat;
mod manager;
mod types;


pub use manager::ChatSession;
pub use types::{ChatView, SessionError, Transcript, Turn, TurnPhase, DEFAULT_CURSOR};
