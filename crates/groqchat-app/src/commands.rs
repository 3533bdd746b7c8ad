//! REPL input parsing.

use groqchat_ai::{ModelName, UnknownModel};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit a question to the model.
    Ask(String),
    /// `/key` alone prompts for a masked key.
    SetKey(Option<String>),
    /// `/model` alone lists the models.
    SetModel(Option<ModelName>),
    Clear,
    History,
    Examples,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command {0} (type /help)")]
    Unknown(String),

    #[error(transparent)]
    Model(#[from] UnknownModel),
}

/// Commands offered for completion, in help order.
pub const COMMANDS: [&str; 8] = [
    "/key", "/model", "/clear", "/history", "/examples", "/help", "/quit", "/exit",
];

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(Command::Empty);
        }
        if !trimmed.starts_with('/') {
            return Ok(Command::Ask(line.trim_end_matches(&['\r', '\n'][..]).to_string()));
        }

        let (name, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim()).filter(|r| !r.is_empty())),
            None => (trimmed, None),
        };

        let command = match name {
            "/key" => Command::SetKey(arg.map(String::from)),
            "/model" => Command::SetModel(arg.map(str::parse).transpose()?),
            "/clear" => Command::Clear,
            "/history" => Command::History,
            "/examples" => Command::Examples,
            "/help" => Command::Help,
            "/quit" | "/exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_question() {
        assert_eq!(
            Command::parse("What is LangChain?").unwrap(),
            Command::Ask("What is LangChain?".into())
        );
    }

    #[test]
    fn question_keeps_inner_whitespace() {
        assert_eq!(
            Command::parse("  indented question\n").unwrap(),
            Command::Ask("  indented question".into())
        );
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(Command::parse("").unwrap(), Command::Empty);
        assert_eq!(Command::parse("   \t").unwrap(), Command::Empty);
    }

    #[test]
    fn key_with_and_without_value() {
        assert_eq!(Command::parse("/key").unwrap(), Command::SetKey(None));
        assert_eq!(Command::parse("/key   ").unwrap(), Command::SetKey(None));
        assert_eq!(
            Command::parse("/key gsk_123").unwrap(),
            Command::SetKey(Some("gsk_123".into()))
        );
    }

    #[test]
    fn model_by_id_index_or_listing() {
        assert_eq!(Command::parse("/model").unwrap(), Command::SetModel(None));
        assert_eq!(
            Command::parse("/model gemma2-9b-it").unwrap(),
            Command::SetModel(Some(ModelName::Gemma2))
        );
        assert_eq!(
            Command::parse("/model 1").unwrap(),
            Command::SetModel(Some(ModelName::Llama33Versatile))
        );
        assert!(matches!(
            Command::parse("/model 9"),
            Err(CommandError::Model(_))
        ));
    }

    #[test]
    fn simple_commands() {
        assert_eq!(Command::parse("/clear").unwrap(), Command::Clear);
        assert_eq!(Command::parse("/history").unwrap(), Command::History);
        assert_eq!(Command::parse("/examples").unwrap(), Command::Examples);
        assert_eq!(Command::parse("/help").unwrap(), Command::Help);
        assert_eq!(Command::parse("/quit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("/exit").unwrap(), Command::Quit);
    }

    #[test]
    fn unknown_command_is_an_error() {
        let err = Command::parse("/frobnicate now").unwrap_err();
        assert_eq!(err, CommandError::Unknown("/frobnicate".into()));
        assert!(err.to_string().contains("/help"));
    }
}
