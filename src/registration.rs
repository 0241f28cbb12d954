//! Interactive collection of new registrations.

use crate::console::{Console, Reply};
use crate::core::validation::{validate_course_name, validate_entered_name};
use crate::error::{Result, ValidationError};
use crate::logging;
use crate::student::{Field, Student, StudentRecord};

pub const FIRST_NAME_PROMPT: &str = "Enter the student's first name";
pub const LAST_NAME_PROMPT: &str = "Enter the student's last name";
pub const COURSE_NAME_PROMPT: &str = "Please enter the name of the course";
pub const CONTINUE_PROMPT: &str = "Would you like to Register Another Student? (y/n)";

enum Attempt {
    Registered(Student),
    Rejected(ValidationError),
    Interrupted,
}

/// Prompt for students until the user declines to add another.
///
/// Each student is appended to `records` as soon as all three fields pass
/// validation. A rejected field discards the attempt and starts over at the
/// first name. An interrupt abandons only the student being entered.
///
/// Returns the number of students added.
pub fn collect_registrations(
    console: &mut dyn Console,
    records: &mut Vec<StudentRecord>,
) -> Result<usize> {
    let mut added = 0;

    loop {
        let student = match attempt_registration(console)? {
            Attempt::Registered(student) => student,
            Attempt::Rejected(err) => {
                console.show(&format!("Error: {err}"));
                continue;
            }
            Attempt::Interrupted => {
                console.show("Registration cancelled.");
                return Ok(added);
            }
        };

        let record = student.to_record();
        logging::log_registration(&record.first_name, &record.last_name, &record.course_name);
        console.show_success(&format!(
            "You have registered {} {} for {}.",
            record.first_name, record.last_name, record.course_name
        ));
        records.push(record);
        added += 1;

        match console.read_line(CONTINUE_PROMPT)? {
            Reply::Line(answer) if wants_another(&answer) => {}
            _ => return Ok(added),
        }
    }
}

fn attempt_registration(console: &mut dyn Console) -> Result<Attempt> {
    let Reply::Line(first_name) = console.read_line(FIRST_NAME_PROMPT)? else {
        return Ok(Attempt::Interrupted);
    };
    if let Err(err) = validate_entered_name(Field::FirstName, &first_name) {
        return Ok(Attempt::Rejected(err));
    }

    let Reply::Line(last_name) = console.read_line(LAST_NAME_PROMPT)? else {
        return Ok(Attempt::Interrupted);
    };
    if let Err(err) = validate_entered_name(Field::LastName, &last_name) {
        return Ok(Attempt::Rejected(err));
    }

    let Reply::Line(course_name) = console.read_line(COURSE_NAME_PROMPT)? else {
        return Ok(Attempt::Interrupted);
    };
    if let Err(err) = validate_course_name(&course_name) {
        return Ok(Attempt::Rejected(err));
    }

    Ok(match Student::new(first_name, last_name, course_name) {
        Ok(student) => Attempt::Registered(student),
        Err(err) => Attempt::Rejected(err),
    })
}

fn wants_another(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
