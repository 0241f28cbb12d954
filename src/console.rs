//! Console I/O for the registration program.
//!
//! The workflow and controller only talk to the [`Console`] trait, so a
//! session can be driven by a real terminal or by a scripted console in
//! tests.

use anyhow::Context;
use colored::Colorize;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::error::{RegistrationError, Result, TechnicalDetail};

/// What came back from a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Line(String),
    /// The user pressed Ctrl+C, or input ended.
    Interrupted,
}

pub trait Console {
    /// Show `prompt` and block until the user answers one line.
    fn read_line(&mut self, prompt: &str) -> Result<Reply>;

    fn show(&mut self, text: &str);

    /// Confirmation of a completed action.
    fn show_success(&mut self, text: &str) {
        self.show(text);
    }

    /// A user-facing error message, optionally followed by a technical
    /// detail block.
    fn show_error(&mut self, message: &str, detail: Option<&TechnicalDetail>);
}

/// Input arriving from the stdin reader thread or the Ctrl+C handler.
#[derive(Debug)]
enum InputEvent {
    Line(String),
    Interrupt,
    Closed,
    Failed(io::Error),
}

/// Console bound to the process's stdin and stdout.
///
/// A background thread reads stdin line by line and the Ctrl+C handler
/// posts an interrupt on the same channel, so a prompt blocked on input
/// returns [`Reply::Interrupted`] instead of the process being killed.
/// Once stdin is closed every later prompt answers `Interrupted`.
pub struct TerminalConsole {
    events: Receiver<InputEvent>,
    theme: Box<dyn Theme>,
    closed: bool,
}

impl TerminalConsole {
    /// Install the Ctrl+C handler and start reading stdin.
    ///
    /// The handler is process-wide, so only one `TerminalConsole` can be
    /// created per process.
    pub fn new() -> Result<Self> {
        let (sender, events) = mpsc::channel();

        let interrupts = sender.clone();
        ctrlc::set_handler(move || {
            let _ = interrupts.send(InputEvent::Interrupt);
        })
        .context("Failed to install Ctrl+C handler")?;

        thread::Builder::new()
            .name("stdin-reader".to_string())
            .spawn(move || read_stdin_lines(sender))
            .map_err(|e| RegistrationError::io_error("start stdin reader", None, e))?;

        let theme: Box<dyn Theme> = if io::stdout().is_terminal()
            && colored::control::SHOULD_COLORIZE.should_colorize()
        {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };

        Ok(Self {
            events,
            theme,
            closed: false,
        })
    }

    fn write_prompt(&self, prompt: &str) -> Result<()> {
        let mut rendered = String::new();
        if self
            .theme
            .format_input_prompt(&mut rendered, prompt, None)
            .is_err()
        {
            rendered = format!("{prompt}: ");
        }
        if !rendered.ends_with(' ') {
            rendered.push(' ');
        }

        let mut stdout = io::stdout();
        write!(stdout, "{rendered}")?;
        stdout.flush()?;
        Ok(())
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Reply> {
        if self.closed {
            return Ok(Reply::Interrupted);
        }
        self.write_prompt(prompt)?;

        match self.events.recv() {
            Ok(InputEvent::Line(line)) => Ok(Reply::Line(line)),
            Ok(InputEvent::Interrupt) => {
                println!();
                Ok(Reply::Interrupted)
            }
            Ok(InputEvent::Closed) | Err(_) => {
                self.closed = true;
                println!();
                Ok(Reply::Interrupted)
            }
            Ok(InputEvent::Failed(err)) => {
                self.closed = true;
                Err(RegistrationError::PromptError(dialoguer::Error::IO(err)))
            }
        }
    }

    fn show(&mut self, text: &str) {
        println!("{text}");
    }

    fn show_success(&mut self, text: &str) {
        println!("{}", text.green());
    }

    fn show_error(&mut self, message: &str, detail: Option<&TechnicalDetail>) {
        println!("{}", message.red());
        println!();
        if let Some(detail) = detail {
            println!("{}", "-- Technical Error Message --".yellow().bold());
            println!("{}", detail.description);
            println!("{}", detail.category.dimmed());
        }
    }
}

/// Forward stdin lines until end of input or a read error.
fn read_stdin_lines(sender: Sender<InputEvent>) {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    pump_lines(&mut input, &sender);
}

fn pump_lines(input: &mut dyn BufRead, sender: &Sender<InputEvent>) {
    loop {
        let mut line = String::new();
        let event = match input.read_line(&mut line) {
            Ok(0) => InputEvent::Closed,
            Ok(_) => InputEvent::Line(strip_line_ending(line)),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => InputEvent::Failed(err),
        };

        let finished = !matches!(event, InputEvent::Line(_));
        if sender.send(event).is_err() || finished {
            return;
        }
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("1\n".to_string()), "1");
        assert_eq!(strip_line_ending("John\r\n".to_string()), "John");
        assert_eq!(strip_line_ending("no newline".to_string()), "no newline");
        assert_eq!(strip_line_ending(" y \n".to_string()), " y ");
    }

    #[test]
    fn test_pump_lines_forwards_lines_then_closed() {
        let (sender, events) = mpsc::channel();
        let mut input = Cursor::new("1\nJohn\r\nlast");

        pump_lines(&mut input, &sender);

        let received: Vec<_> = events.try_iter().collect();
        assert_eq!(received.len(), 4);
        assert!(matches!(&received[0], InputEvent::Line(l) if l == "1"));
        assert!(matches!(&received[1], InputEvent::Line(l) if l == "John"));
        assert!(matches!(&received[2], InputEvent::Line(l) if l == "last"));
        assert!(matches!(received[3], InputEvent::Closed));
    }

    #[test]
    fn test_pump_lines_stops_when_receiver_is_gone() {
        let (sender, events) = mpsc::channel();
        drop(events);
        let mut input = Cursor::new("1\n2\n");

        // Returns instead of looping over the remaining input
        pump_lines(&mut input, &sender);
    }
}
