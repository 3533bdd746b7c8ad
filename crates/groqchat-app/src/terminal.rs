//! Terminal display surface: banner, role-tagged transcript, and the live
//! region the streamed reply is drawn into.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::io::{self, Write};

use colored::Colorize;
use crossterm::{cursor, execute, terminal};
use groqchat_ai::{ChatView, ModelName, Role, Turn};
use groqchat_common::GroqchatError;
use groqchat_config::UiConfig;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing::warn;

use crate::commands::COMMANDS;

pub const TITLE: &str = "🚀 Simple Groq Chatbot";
pub const SIGNUP_URL: &str = "https://console.groq.com";
pub const EXAMPLES: [&str; 4] = [
    "What is LangChain?",
    "Explain Groq's LPU technology",
    "How do I learn programming?",
    "Write a haiku about AI",
];
const FOOTER: &str = "Built with Rust & Groq | Experience the speed! ⚡";

/// State of the in-flight reply region.
#[derive(Debug, Default)]
struct LiveRegion {
    open: bool,
    /// Bytes of the reply already on screen.
    printed: usize,
    marker_drawn: bool,
}

pub struct TerminalView<W: Write> {
    out: W,
    cursor: String,
    show_examples: bool,
    live: LiveRegion,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, ui: &UiConfig) -> Self {
        Self {
            out,
            cursor: ui.cursor.clone(),
            show_examples: ui.show_examples,
            live: LiveRegion::default(),
        }
    }

    fn emit(&mut self, write: impl FnOnce(&mut W) -> io::Result<()>) {
        if let Err(e) = write(&mut self.out).and_then(|_| self.out.flush()) {
            warn!("terminal write failed: {e}");
        }
    }

    fn erase_marker(&mut self) {
        if !self.live.marker_drawn {
            return;
        }
        let width = self.cursor.chars().count() as u16;
        self.emit(|out| {
            execute!(
                out,
                cursor::MoveLeft(width),
                terminal::Clear(terminal::ClearType::UntilNewLine)
            )
        });
        self.live.marker_drawn = false;
    }

    fn open_live(&mut self) {
        if self.live.open {
            return;
        }
        self.emit(|out| write!(out, "{} ", role_label(Role::Assistant)));
        self.live = LiveRegion {
            open: true,
            ..LiveRegion::default()
        };
    }

    fn close_live(&mut self) {
        self.erase_marker();
        self.emit(|out| writeln!(out));
        self.live = LiveRegion::default();
    }

    fn write_turn(&mut self, turn: &Turn) {
        self.emit(|out| writeln!(out, "{} {}", role_label(turn.role), turn.content));
    }

    pub fn show_examples(&mut self) {
        self.emit(|out| {
            writeln!(out, "{}", "💡 Try these examples:".bold())?;
            for example in EXAMPLES {
                writeln!(out, "  - {example}")?;
            }
            writeln!(out)?;
            writeln!(out, "{}", FOOTER.dimmed())
        });
    }

    pub fn show_help(&mut self) {
        self.emit(|out| {
            writeln!(out, "{}", "Commands:".bold())?;
            writeln!(out, "  /key [value]     set the Groq API key (prompts, hidden, when no value)")?;
            writeln!(out, "  /model [id|n]    choose the model, or list them")?;
            writeln!(out, "  /clear           clear the chat")?;
            writeln!(out, "  /history         redraw the chat")?;
            writeln!(out, "  /examples        show example questions")?;
            writeln!(out, "  /quit            leave")?;
            writeln!(out, "Anything else is sent as a question.")
        });
    }

    pub fn show_models(&mut self, current: ModelName) {
        self.emit(|out| {
            for (i, model) in ModelName::ALL.iter().enumerate() {
                let mark = if *model == current { "*" } else { " " };
                writeln!(out, "{mark} {}. {}", i + 1, model.id())?;
            }
            Ok(())
        });
    }

    pub fn show_goodbye(&mut self) {
        self.emit(|out| writeln!(out, "{}", "Goodbye!".bright_green()));
    }

    pub fn show_notice(&mut self, message: &str) {
        self.emit(|out| writeln!(out, "{}", message.bright_black()));
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChatView for TerminalView<W> {
    fn render_transcript(&mut self, turns: &[Turn]) {
        self.live = LiveRegion::default();
        self.emit(|out| {
            execute!(
                out,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
            writeln!(out, "{}", TITLE.bold())?;
            writeln!(out)
        });
        for turn in turns {
            self.write_turn(turn);
        }
        if turns.is_empty() && self.show_examples {
            self.show_examples();
        }
    }

    fn show_user_turn(&mut self, content: &str) {
        let turn = Turn {
            role: Role::User,
            content: content.to_string(),
        };
        self.write_turn(&turn);
    }

    fn update_live(&mut self, rendered: &str) {
        let body = rendered.strip_suffix(self.cursor.as_str()).unwrap_or(rendered);
        self.open_live();
        self.erase_marker();

        let fresh = body.get(self.live.printed..).unwrap_or(body);
        let marker = self.cursor.dimmed().to_string();
        self.emit(|out| write!(out, "{fresh}{marker}"));
        self.live.printed = body.len();
        self.live.marker_drawn = true;
    }

    fn finish_live(&mut self, content: &str) {
        self.open_live();
        self.erase_marker();
        let rest = content.get(self.live.printed..).unwrap_or_default();
        self.emit(|out| write!(out, "{rest}"));
        self.close_live();
    }

    fn show_error(&mut self, message: &str) {
        if self.live.open {
            self.close_live();
        }
        self.emit(|out| writeln!(out, "{}", format!("Error: {message}").red()));
    }

    fn show_missing_key(&mut self) {
        self.emit(|out| {
            writeln!(
                out,
                "{}",
                "👆 Please enter your Groq API key with /key to start chatting!".yellow()
            )?;
            writeln!(out, "Get your free API key here: {SIGNUP_URL}")
        });
    }
}

fn role_label(role: Role) -> String {
    match role {
        Role::User => "you ›".bright_cyan().bold().to_string(),
        Role::Assistant => "assistant ›".bright_blue().bold().to_string(),
        Role::System => "system ›".bright_black().to_string(),
    }
}

/// Completion and hints for slash commands.
#[derive(Clone, Default)]
pub struct CommandHelper;

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return Ok((0, Vec::new()));
        }
        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Highlighter for CommandHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }
}

impl Validator for CommandHelper {}

pub type CommandEditor = Editor<CommandHelper, DefaultHistory>;

pub fn command_editor() -> Result<CommandEditor, GroqchatError> {
    let mut editor = CommandEditor::new().map_err(|e| GroqchatError::Terminal(e.to_string()))?;
    editor.set_helper(Some(CommandHelper));
    Ok(editor)
}

/// Draws every typed character as `*`.
#[derive(Default)]
struct MaskingHelper;

impl Helper for MaskingHelper {}
impl Completer for MaskingHelper {
    type Candidate = String;
}
impl Hinter for MaskingHelper {
    type Hint = String;
}
impl Validator for MaskingHelper {}

impl Highlighter for MaskingHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.is_empty() {
            Borrowed(line)
        } else {
            Owned("*".repeat(line.chars().count()))
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

/// Prompt for the API key without echoing it. The key never enters history.
pub fn read_api_key() -> Result<String, GroqchatError> {
    let mut editor: Editor<MaskingHelper, DefaultHistory> =
        Editor::new().map_err(|e| GroqchatError::Terminal(e.to_string()))?;
    editor.set_helper(Some(MaskingHelper));
    let key = editor
        .readline("Groq API key: ")
        .map_err(|e| GroqchatError::Terminal(e.to_string()))?;
    Ok(key.trim().to_string())
}
