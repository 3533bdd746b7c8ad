//! Prompt rendering stage.

use crate::Message;

/// System instruction sent ahead of every question.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant powered by Groq. Answer questions clearly and concisely.";

/// Renders a question into the model input: the system instruction followed
/// by the question as the only user message. Earlier turns are never
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    system: String,
}

impl PromptTemplate {
    pub fn new(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
        }
    }

    pub fn render(&self, question: &str) -> Vec<Message> {
        vec![Message::system(&self.system), Message::user(question)]
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(SYSTEM_PROMPT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_is_passed_through_raw() {
        let rendered = PromptTemplate::default().render("  {question} with braces  ");
        assert_eq!(rendered[1], Message::user("  {question} with braces  "));
    }

    #[test]
    fn custom_system_instruction() {
        let template = PromptTemplate::new("Reply in French.");
        assert_eq!(template.render("hi")[0], Message::system("Reply in French."));
    }
}
