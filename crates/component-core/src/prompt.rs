//! Interactive prompt abstraction
//!
//! Resolution never talks to a terminal directly. Every question is described
//! by one of the prompt types below and handed to a [`Prompter`], which
//! suspends the resolution until an answer is available. The cliclack-backed
//! implementation lives in [`crate::tui`]; tests use
//! [`crate::testing::ScriptedPrompter`].

use crate::validate::NameError;
use std::io;

/// Validator attached to an input prompt; rejected input is asked again
pub type InputValidator = fn(&str) -> Result<(), NameError>;

/// Free-text input prompt
#[derive(Debug, Clone)]
pub struct InputPrompt {
    /// Stable identifier of the question (e.g. `name`)
    pub key: &'static str,
    pub message: String,
    pub placeholder: Option<String>,
    /// Value used when the answer is left blank; `None` makes the answer required
    pub default: Option<String>,
    pub validator: Option<InputValidator>,
}

impl InputPrompt {
    pub fn new(key: &'static str, message: impl Into<String>) -> Self {
        Self {
            key,
            message: message.into(),
            placeholder: None,
            default: None,
            validator: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn validator(mut self, validator: InputValidator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Whether blank input is refused before any validator sees it
    ///
    /// A default or a validator takes over the handling of blank input, so
    /// the validator can report its own message for it.
    pub fn requires_input(&self) -> bool {
        self.default.is_none() && self.validator.is_none()
    }
}

/// One option of a [`SelectPrompt`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub hint: String,
}

/// Single-choice list prompt; answered with the index of the chosen option
#[derive(Debug, Clone)]
pub struct SelectPrompt {
    pub key: &'static str,
    pub message: String,
    pub choices: Vec<Choice>,
}

impl SelectPrompt {
    pub fn new(key: &'static str, message: impl Into<String>) -> Self {
        Self {
            key,
            message: message.into(),
            choices: Vec::new(),
        }
    }

    pub fn choice(mut self, label: impl Into<String>, hint: impl Into<String>) -> Self {
        self.choices.push(Choice {
            label: label.into(),
            hint: hint.into(),
        });
        self
    }
}

/// Yes/no confirmation prompt
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    pub key: &'static str,
    pub message: String,
    pub default: bool,
}

impl ConfirmPrompt {
    pub fn new(key: &'static str, message: impl Into<String>, default: bool) -> Self {
        Self {
            key,
            message: message.into(),
            default,
        }
    }
}

/// Source of interactively elicited answers
///
/// Implementations report a user abort as [`io::ErrorKind::Interrupted`].
#[allow(async_fn_in_trait)]
pub trait Prompter {
    /// Ask for free text, re-asking until the attached validator accepts it
    async fn input(&mut self, prompt: &InputPrompt) -> io::Result<String>;

    /// Ask for one of the listed choices, returning its index
    async fn select(&mut self, prompt: &SelectPrompt) -> io::Result<usize>;

    async fn confirm(&mut self, prompt: &ConfirmPrompt) -> io::Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_component_name;

    #[test]
    fn test_plain_input_requires_text() {
        assert!(InputPrompt::new("note", "Note").requires_input());
    }

    #[test]
    fn test_validator_decides_on_blank_input() {
        let prompt = InputPrompt::new("name", "Name").validator(validate_component_name);
        assert!(!prompt.requires_input());
    }

    #[test]
    fn test_default_accepts_blank_input() {
        let prompt = InputPrompt::new("folder", "Folder").default_value("");
        assert!(!prompt.requires_input());
    }
}
