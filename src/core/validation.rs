//! Pure validation logic for student and course names
//!
//! These rules are shared by record construction, record mutation and the
//! interactive registration workflow, and can be tested without any I/O.

use crate::error::ValidationError;
use crate::student::Field;

/// Validates a first or last name.
///
/// The empty string is accepted as the "unset" value; anything else must be
/// made of alphabetic characters only.
pub fn validate_person_name(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.chars().all(char::is_alphabetic) {
        Ok(())
    } else {
        Err(ValidationError::for_field(field))
    }
}

/// Validates a name typed in at a prompt. Unlike a stored name it cannot be
/// left empty.
pub fn validate_entered_name(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::for_field(field));
    }
    validate_person_name(field, value)
}

/// Validates a course name: letters, digits and whitespace only.
pub fn validate_course_name(value: &str) -> Result<(), ValidationError> {
    if value
        .chars()
        .all(|c| c.is_alphanumeric() || c.is_whitespace())
    {
        Ok(())
    } else {
        Err(ValidationError::for_field(Field::CourseName))
    }
}

/// Capitalizes the first character of every whitespace-delimited word and
/// lowercases the rest. Whitespace is kept as-is.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;

    for c in value.chars() {
        if c.is_whitespace() {
            result.push(c);
            at_word_start = true;
        } else if at_word_start {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}
