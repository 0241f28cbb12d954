//! Integration tests driving whole sessions through a scripted console
//!
//! Each test scripts the operator's answers, runs the menu loop to
//! completion and checks the resulting records, transcript and file.

use course_registration::app::{
    Session, CHOICE_PROMPT, FAREWELL, INTERRUPTED_FAREWELL, UNEXPECTED_ERROR_MESSAGE,
};
use course_registration::registration::{collect_registrations, FIRST_NAME_PROMPT};
use course_registration::storage::{read_records, DEFAULT_FILE_NAME, READ_FAILURE_MESSAGE};
use course_registration::test_utils::assertions::{
    assert_error_shown, assert_listing_shown, assert_output_contains,
};
use course_registration::test_utils::fixtures::{
    sample_enrollment_json, sample_records, write_enrollment_file,
};
use course_registration::test_utils::mocks::ScriptedConsole;
use course_registration::{SessionEnd, StudentRecord};
use tempfile::TempDir;

#[test]
fn test_register_one_student() {
    let mut console = ScriptedConsole::with_lines(&["John", "Smith", "CS 101", "n"]);
    let mut records = Vec::new();

    collect_registrations(&mut console, &mut records).unwrap();

    assert_eq!(records, vec![StudentRecord::new("John", "Smith", "Cs 101")]);
    assert_eq!(console.remaining_steps(), 0);
}

#[test]
fn test_invalid_first_name_restarts_without_partial_record() {
    let mut console = ScriptedConsole::with_lines(&["John3", "John", "Smith", "Math", "n"]);
    let mut records = Vec::new();

    collect_registrations(&mut console, &mut records).unwrap();

    assert_eq!(records, vec![StudentRecord::new("John", "Smith", "Math")]);
    assert_eq!(console.prompts()[0], FIRST_NAME_PROMPT);
    assert_eq!(console.prompts()[1], FIRST_NAME_PROMPT);
    assert_output_contains(&console, "Error: The first name should only contain letters");
}

#[test]
fn test_invalid_course_restarts_from_first_name() {
    let mut console = ScriptedConsole::with_lines(&[
        "John", "Smith", "C++", "Jane", "Doe", "Rust 1", "n",
    ]);
    let mut records = Vec::new();

    collect_registrations(&mut console, &mut records).unwrap();

    assert_eq!(records, vec![StudentRecord::new("Jane", "Doe", "Rust 1")]);
    assert_output_contains(
        &console,
        "Error: The course name should only contain letters, numbers, and spaces",
    );
}

#[test]
fn test_invalid_menu_choice_leaves_records_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = Session::with_records(
        ScriptedConsole::with_lines(&["5", "4"]),
        temp_dir.path().join(DEFAULT_FILE_NAME),
        sample_records(),
    );

    assert_eq!(session.run(), SessionEnd::Exited);

    assert_eq!(session.records(), sample_records().as_slice());
    assert_output_contains(session.console(), "choose only 1, 2, 3, or 4");
    assert_eq!(
        session.console().prompts(),
        &[CHOICE_PROMPT, CHOICE_PROMPT]
    );
}

#[test]
fn test_interrupt_at_menu_ends_session() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = Session::with_records(
        ScriptedConsole::new().interrupt().line("1").line("never read"),
        temp_dir.path().join(DEFAULT_FILE_NAME),
        Vec::new(),
    );

    assert_eq!(session.run(), SessionEnd::Interrupted);

    let console = session.console();
    assert_eq!(console.output().last().unwrap(), INTERRUPTED_FAREWELL);
    assert_eq!(console.prompts().len(), 1);
    assert_eq!(console.remaining_steps(), 2);
}

#[test]
fn test_exit_choice_says_goodbye() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = Session::with_records(
        ScriptedConsole::with_lines(&["4"]),
        temp_dir.path().join(DEFAULT_FILE_NAME),
        Vec::new(),
    );

    assert_eq!(session.run(), SessionEnd::Exited);
    assert_eq!(session.console().output().last().unwrap(), FAREWELL);
}

#[test]
fn test_start_with_missing_file_reports_and_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let session = Session::start(
        ScriptedConsole::new(),
        temp_dir.path().join(DEFAULT_FILE_NAME),
    );

    assert!(session.records().is_empty());
    assert_error_shown(session.console(), READ_FAILURE_MESSAGE);
}

#[test]
fn test_start_loads_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_enrollment_file(temp_dir.path(), &sample_enrollment_json());

    let mut session = Session::start(ScriptedConsole::with_lines(&["2", "4"]), path);
    session.run();

    assert_eq!(session.records(), sample_records().as_slice());
    assert!(session.console().errors().is_empty());
    assert_listing_shown(session.console(), &sample_records());
}

#[test]
fn test_register_save_and_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(DEFAULT_FILE_NAME);

    let mut session = Session::start(
        ScriptedConsole::with_lines(&[
            "1", "ada", "LOVELACE", "math 101", "y", "Alan", "Turing", "Computability", "n",
            "3", "4",
        ]),
        path.clone(),
    );
    assert_eq!(session.run(), SessionEnd::Exited);

    let expected = vec![
        StudentRecord::new("Ada", "Lovelace", "Math 101"),
        StudentRecord::new("Alan", "Turing", "Computability"),
    ];
    assert_eq!(read_records(&path).unwrap(), expected);
    assert_listing_shown(session.console(), &expected);

    let reloaded = Session::start(ScriptedConsole::new(), path);
    assert_eq!(reloaded.records(), expected.as_slice());
}

#[test]
fn test_duplicates_are_kept_in_registration_order() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = Session::with_records(
        ScriptedConsole::with_lines(&[
            "1", "Ann", "Lee", "Art", "y", "Ann", "Lee", "Art", "n", "4",
        ]),
        temp_dir.path().join(DEFAULT_FILE_NAME),
        Vec::new(),
    );

    session.run();

    let records = session.into_records();
    assert_eq!(
        records,
        vec![
            StudentRecord::new("Ann", "Lee", "Art"),
            StudentRecord::new("Ann", "Lee", "Art"),
        ]
    );
}

#[test]
fn test_prompt_failure_during_registration_is_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = Session::with_records(
        ScriptedConsole::new()
            .line("1")
            .line("Ann")
            .fail("stdin broke")
            .line("2")
            .line("4"),
        temp_dir.path().join(DEFAULT_FILE_NAME),
        sample_records(),
    );

    assert_eq!(session.run(), SessionEnd::Exited);

    assert_error_shown(session.console(), UNEXPECTED_ERROR_MESSAGE);
    assert_eq!(session.records(), sample_records().as_slice());
    assert_listing_shown(session.console(), &sample_records());
}

#[test]
fn test_interrupt_during_registration_returns_to_menu() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = Session::with_records(
        ScriptedConsole::new()
            .line("1")
            .line("Ann")
            .interrupt()
            .line("4"),
        temp_dir.path().join(DEFAULT_FILE_NAME),
        Vec::new(),
    );

    assert_eq!(session.run(), SessionEnd::Exited);
    assert!(session.records().is_empty());
    assert_output_contains(session.console(), "Registration cancelled.");
}
