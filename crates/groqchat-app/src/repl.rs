//! Read-eval loop: one line of input becomes one [`Command`] applied to the
//! chat session.

use std::io::Write;

use groqchat_ai::{ChatSession, ChatView};
use rustyline::error::ReadlineError;
use tracing::{debug, warn};

use crate::commands::Command;
use crate::terminal::{self, TerminalView};

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// `/key` without a value: read the key masked, then apply it.
    PromptKey,
    Quit,
}

/// Apply one command to the session. Provider failures are already shown by
/// the session; they never end the loop.
pub async fn handle<W: Write>(
    session: &mut ChatSession,
    view: &mut TerminalView<W>,
    command: Command,
) -> Flow {
    match command {
        Command::Empty => {}
        Command::Ask(question) => {
            if let Err(e) = session.submit_question(&question, view).await {
                debug!("turn ended without a reply: {e}");
            }
        }
        Command::SetKey(Some(key)) => apply_key(session, view, &key),
        Command::SetKey(None) => return Flow::PromptKey,
        Command::SetModel(Some(model)) => {
            session.set_model(model);
            view.show_notice(&format!("Model set to {model}"));
        }
        Command::SetModel(None) => view.show_models(session.credentials().model),
        Command::Clear => session.clear(view),
        Command::History => view.render_transcript(session.transcript().turns()),
        Command::Examples => view.show_examples(),
        Command::Help => view.show_help(),
        Command::Quit => return Flow::Quit,
    }
    Flow::Continue
}

pub fn apply_key<W: Write>(session: &mut ChatSession, view: &mut TerminalView<W>, key: &str) {
    let key = key.trim();
    session.set_api_key(key);
    if key.is_empty() {
        view.show_missing_key();
    } else {
        view.show_notice("API key set");
    }
}

fn prompt(session: &ChatSession) -> String {
    format!("[{}] >> ", session.credentials().model)
}

pub async fn run<W: Write>(
    session: &mut ChatSession,
    view: &mut TerminalView<W>,
) -> groqchat_common::Result<()> {
    let mut editor = terminal::command_editor()?;

    view.render_transcript(session.transcript().turns());
    if !session.credentials().has_api_key() {
        view.show_missing_key();
    }

    loop {
        let line = match editor.readline(&prompt(session)) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                view.show_notice("Ctrl-C: type /quit to exit.");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(groqchat_common::GroqchatError::Terminal(e.to_string())),
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                view.show_notice(&e.to_string());
                continue;
            }
        };

        if let Command::Ask(question) = &command {
            if let Err(e) = editor.add_history_entry(question.as_str()) {
                warn!("failed to record history: {e}");
            }
        }

        match handle(session, view, command).await {
            Flow::Continue => {}
            Flow::PromptKey => match terminal::read_api_key() {
                Ok(key) => apply_key(session, view, &key),
                Err(e) => view.show_notice(&e.to_string()),
            },
            Flow::Quit => break,
        }
    }

    view.show_goodbye();
    Ok(())
}
