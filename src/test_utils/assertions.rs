//! Assertions over console transcripts

use crate::student::StudentRecord;
use crate::test_utils::mocks::ScriptedConsole;

/// Asserts the console printed a separator-framed listing of exactly
/// `records`, in order, at least once.
pub fn assert_listing_shown(console: &ScriptedConsole, records: &[StudentRecord]) {
    let separator = "-".repeat(crate::app::SEPARATOR_WIDTH);
    let expected: Vec<String> = records.iter().map(StudentRecord::enrollment_line).collect();
    let output = console.output();

    let found = output.windows(expected.len() + 2).any(|window| {
        window[0] == separator
            && window[window.len() - 1] == separator
            && window[1..window.len() - 1] == expected[..]
    });

    assert!(
        found,
        "Expected a listing of {expected:?} framed by separators, got: {output:#?}"
    );
}

/// Asserts a message containing `needle` was shown.
pub fn assert_output_contains(console: &ScriptedConsole, needle: &str) {
    assert!(
        console.has_output(needle),
        "Expected output to contain '{needle}', but got: {:#?}",
        console.output()
    );
}

/// Asserts an error whose message contains `needle` was shown.
pub fn assert_error_shown(console: &ScriptedConsole, needle: &str) {
    assert!(
        console.errors().iter().any(|e| e.message.contains(needle)),
        "Expected an error containing '{needle}', but got: {:#?}",
        console.errors()
    );
}
