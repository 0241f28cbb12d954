//! Scripted console for driving sessions in tests
//!
//! `ScriptedConsole` replays a fixed list of answers and records everything
//! the program prints, so workflows and whole sessions can be checked
//! without a terminal.

use std::collections::VecDeque;
use std::io;

use crate::console::{Console, Reply};
use crate::error::{RegistrationError, Result, TechnicalDetail};

/// One scripted answer to a prompt.
#[derive(Debug, Clone)]
pub enum ScriptStep {
    Line(String),
    Interrupt,
    /// The prompt itself fails, as a broken terminal would.
    Fail(String),
}

/// An error shown through [`Console::show_error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownError {
    pub message: String,
    pub detail: Option<TechnicalDetail>,
    /// Number of output lines printed before this error.
    pub output_position: usize,
}

/// A console that answers prompts from a script. Once the script runs out
/// every prompt answers [`Reply::Interrupted`], like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    script: VecDeque<ScriptStep>,
    prompts: Vec<String>,
    output: Vec<String>,
    errors: Vec<ShownError>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines(lines: &[&str]) -> Self {
        lines.iter().fold(Self::new(), |console, line| console.line(*line))
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.script.push_back(ScriptStep::Line(text.into()));
        self
    }

    pub fn interrupt(mut self) -> Self {
        self.script.push_back(ScriptStep::Interrupt);
        self
    }

    pub fn fail(mut self, message: impl Into<String>) -> Self {
        self.script.push_back(ScriptStep::Fail(message.into()));
        self
    }

    /// Every prompt shown, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every line printed through `show`/`show_success`, in order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn errors(&self) -> &[ShownError] {
        &self.errors
    }

    pub fn has_output(&self, needle: &str) -> bool {
        self.output.iter().any(|text| text.contains(needle))
    }

    /// Lines printed after the error at `index` was shown.
    pub fn output_after_error(&self, index: usize) -> &[String] {
        &self.output[self.errors[index].output_position..]
    }

    pub fn remaining_steps(&self) -> usize {
        self.script.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Reply> {
        self.prompts.push(prompt.to_string());
        match self.script.pop_front() {
            Some(ScriptStep::Line(text)) => Ok(Reply::Line(text)),
            Some(ScriptStep::Interrupt) | None => Ok(Reply::Interrupted),
            Some(ScriptStep::Fail(message)) => Err(RegistrationError::PromptError(
                dialoguer::Error::IO(io::Error::other(message)),
            )),
        }
    }

    fn show(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn show_error(&mut self, message: &str, detail: Option<&TechnicalDetail>) {
        self.errors.push(ShownError {
            message: message.to_string(),
            detail: detail.cloned(),
            output_position: self.output.len(),
        });
    }
}
