//! Scripted prompter for driving resolution without a terminal

use crate::prompt::{ConfirmPrompt, InputPrompt, Prompter, SelectPrompt};
use std::collections::VecDeque;
use std::io;

/// A scripted answer to the next prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Typed text for an input prompt
    Text(&'static str),
    /// Label of the option picked in a select prompt
    Choice(&'static str),
    Confirm(bool),
}

/// Replays answers in order and records which prompts were issued
///
/// Rejected input is asked again with the next scripted answer, the way the
/// terminal re-asks. Running out of answers behaves like the user aborting.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<&'static str>,
    rejections: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            ..Default::default()
        }
    }

    /// Keys of the prompts issued so far, in order (re-asks are not repeated)
    pub fn asked(&self) -> &[&'static str] {
        &self.asked
    }

    /// Validator messages for every rejected input
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    /// Answers left unconsumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, key: &'static str) -> io::Result<Answer> {
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::Interrupted,
                format!("no scripted answer for '{}'", key),
            )
        })
    }
}

fn mismatch(key: &str, expected: &str, got: &Answer) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("'{}' expects {}, script has {:?}", key, expected, got),
    )
}

impl Prompter for ScriptedPrompter {
    async fn input(&mut self, prompt: &InputPrompt) -> io::Result<String> {
        self.asked.push(prompt.key);
        loop {
            let text = match self.next(prompt.key)? {
                Answer::Text(text) => text.to_string(),
                other => return Err(mismatch(prompt.key, "text", &other)),
            };

            // Same blank-input contract as the cliclack prompter
            if text.is_empty() && prompt.requires_input() {
                self.rejections.push("Input required".to_string());
                continue;
            }

            let text = match (&prompt.default, text.is_empty()) {
                (Some(default), true) => default.clone(),
                _ => text,
            };

            match prompt.validator.map(|validate| validate(&text)) {
                Some(Err(e)) => self.rejections.push(e.to_string()),
                _ => return Ok(text),
            }
        }
    }

    async fn select(&mut self, prompt: &SelectPrompt) -> io::Result<usize> {
        self.asked.push(prompt.key);
        match self.next(prompt.key)? {
            Answer::Choice(label) => prompt
                .choices
                .iter()
                .position(|c| c.label == label)
                .ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("'{}' has no option '{}'", prompt.key, label),
                    )
                }),
            other => Err(mismatch(prompt.key, "a choice", &other)),
        }
    }

    async fn confirm(&mut self, prompt: &ConfirmPrompt) -> io::Result<bool> {
        self.asked.push(prompt.key);
        match self.next(prompt.key)? {
            Answer::Confirm(value) => Ok(value),
            other => Err(mismatch(prompt.key, "a confirmation", &other)),
        }
    }
}
