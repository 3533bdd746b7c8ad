//! One request/response turn.

use futures_util::TryStreamExt;
use tracing::{debug, warn};

use super::manager::ChatSession;
use super::types::{ChatView, SessionError, TurnPhase};

impl ChatSession {
    /// Submit a question and stream the reply into `view`.
    ///
    /// The user turn is appended before the request goes out. The assistant
    /// turn is appended only when the stream completes; on failure the
    /// partial reply is discarded and the error is shown.
    pub async fn submit_question(
        &mut self,
        question: &str,
        view: &mut dyn ChatView,
    ) -> Result<String, SessionError> {
        if question.trim().is_empty() {
            return Err(SessionError::EmptyQuestion);
        }

        let pipeline = match self.build_pipeline() {
            Ok(Some(pipeline)) => pipeline,
            Ok(None) => {
                view.show_missing_key();
                return Err(SessionError::MissingApiKey);
            }
            Err(e) => {
                view.show_error(&e.to_string());
                return Err(e.into());
            }
        };

        self.transcript.push_user(question);
        view.show_user_turn(question);
        self.enter(TurnPhase::UserAppended, view);

        let mut chunks = pipeline.stream(question);
        self.enter(TurnPhase::Streaming, view);

        let mut buffer = String::new();
        loop {
            match chunks.try_next().await {
                Ok(Some(chunk)) => {
                    buffer.push_str(&chunk);
                    view.update_live(&format!("{buffer}{}", self.cursor));
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, partial_len = buffer.len(), "turn failed");
                    self.enter(TurnPhase::Failed, view);
                    view.show_error(&e.to_string());
                    self.enter(TurnPhase::Idle, view);
                    return Err(e.into());
                }
            }
        }

        view.finish_live(&buffer);
        self.transcript.push_assistant(buffer.clone());
        debug!(
            model = pipeline.model().model_id(),
            reply_len = buffer.len(),
            "turn completed"
        );
        self.enter(TurnPhase::Completed, view);
        self.enter(TurnPhase::Idle, view);
        Ok(buffer)
    }
}
