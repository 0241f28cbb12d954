//! The menu-driven session that ties loading, registration, listing and
//! saving together.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::console::{Console, Reply};
use crate::error::Result;
use crate::logging;
use crate::registration::collect_registrations;
use crate::storage;
use crate::student::StudentRecord;

pub const MENU: &str = "
------ Course Registration Program ------
  Select from the following menu:
    1. Register a Student for a Course
    2. Show current data
    3. Save data to a file
    4. Exit the program
-----------------------------------------
";

pub const CHOICE_PROMPT: &str = "Enter your menu choice number";
pub const SEPARATOR_WIDTH: usize = 50;
pub const FAREWELL: &str = "Goodbye!";
pub const INTERRUPTED_FAREWELL: &str = "Program terminated by user. Goodbye!";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";
pub const REGISTERED_HEADER: &str = "The following students are registered:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Display,
    Save,
    Exit,
}

/// Input that is not one of the four menu numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice(pub String);

impl fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Please, choose only 1, 2, 3, or 4")
    }
}

impl std::error::Error for InvalidChoice {}

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        match input.trim() {
            "1" => Ok(Self::Register),
            "2" => Ok(Self::Display),
            "3" => Ok(Self::Save),
            "4" => Ok(Self::Exit),
            _ => Err(InvalidChoice(input.to_string())),
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked "Exit the program".
    Exited,
    /// The user interrupted the menu prompt.
    Interrupted,
}

/// Controller states. Every non-terminal state leads back to
/// `MenuDisplay`; `Exit` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    MenuDisplay,
    AwaitChoice,
    Register,
    Display,
    Persist,
    InvalidChoice(InvalidChoice),
    Exit(SessionEnd),
}

/// One run of the registration program over a single enrollment file.
pub struct Session<C: Console> {
    console: C,
    path: PathBuf,
    records: Vec<StudentRecord>,
}

impl<C: Console> Session<C> {
    /// Start a session, loading whatever the enrollment file at `path` holds.
    /// A file that cannot be loaded is reported and the session starts empty.
    pub fn start(mut console: C, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = storage::load_or_keep(&path, Vec::new(), &mut console);
        Self {
            console,
            path,
            records,
        }
    }

    /// Start a session over records already in memory, without loading.
    pub fn with_records(
        console: C,
        path: impl Into<PathBuf>,
        records: Vec<StudentRecord>,
    ) -> Self {
        Self {
            console,
            path: path.into(),
            records,
        }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// End the session and hand back the collection it built.
    pub fn into_records(self) -> Vec<StudentRecord> {
        self.records
    }

    /// Run the menu loop until the user exits or interrupts.
    ///
    /// Errors from a single iteration are reported and the loop carries on.
    pub fn run(&mut self) -> SessionEnd {
        let mut state = State::MenuDisplay;
        loop {
            match self.advance(state) {
                Ok(State::Exit(end)) => return end,
                Ok(next) => state = next,
                Err(err) => {
                    tracing::error!(error = %err, "Unexpected error in menu loop");
                    self.console
                        .show_error(UNEXPECTED_ERROR_MESSAGE, Some(&err.technical_detail()));
                    state = State::MenuDisplay;
                }
            }
        }
    }

    /// Perform the work of `state` and return the state that follows it.
    pub fn advance(&mut self, state: State) -> Result<State> {
        let next = match state {
            State::MenuDisplay => {
                self.console.show(MENU);
                State::AwaitChoice
            }
            State::AwaitChoice => self.await_choice()?,
            State::Register => {
                collect_registrations(&mut self.console, &mut self.records)?;
                State::MenuDisplay
            }
            State::Display => {
                self.console.show(REGISTERED_HEADER);
                self.show_records();
                State::MenuDisplay
            }
            State::Persist => {
                self.persist();
                State::MenuDisplay
            }
            State::InvalidChoice(invalid) => {
                self.console.show(&invalid.to_string());
                State::MenuDisplay
            }
            State::Exit(end) => State::Exit(end),
        };
        Ok(next)
    }

    fn await_choice(&mut self) -> Result<State> {
        let input = match self.console.read_line(CHOICE_PROMPT)? {
            Reply::Line(input) => input,
            Reply::Interrupted => {
                self.console.show(INTERRUPTED_FAREWELL);
                return Ok(State::Exit(SessionEnd::Interrupted));
            }
        };

        let choice = input.parse::<MenuChoice>();
        logging::log_menu_choice(&input, choice.is_ok());

        Ok(match choice {
            Ok(MenuChoice::Register) => State::Register,
            Ok(MenuChoice::Display) => State::Display,
            Ok(MenuChoice::Save) => State::Persist,
            Ok(MenuChoice::Exit) => {
                self.console.show(FAREWELL);
                State::Exit(SessionEnd::Exited)
            }
            Err(invalid) => State::InvalidChoice(invalid),
        })
    }

    fn persist(&mut self) {
        if storage::save_or_report(&self.path, &self.records, &mut self.console) {
            self.console.show_success(&format!(
                "The following data has been saved to {}:",
                file_label(&self.path)
            ));
        } else {
            self.console.show(REGISTERED_HEADER);
        }
        self.show_records();
    }

    fn show_records(&mut self) {
        render_records(&mut self.console, &self.records);
    }
}

/// Print every record as an enrollment line, framed by separator lines.
pub fn render_records(console: &mut dyn Console, records: &[StudentRecord]) {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    console.show(&separator);
    for record in records {
        console.show(&record.enrollment_line());
    }
    console.show(&separator);
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
