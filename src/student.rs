//! The validated student enrollment record and its persisted shape.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::validation::{title_case, validate_course_name, validate_person_name};
use crate::error::ValidationError;

/// Which field of a [`Student`] a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    CourseName,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::CourseName => "course name",
        };
        f.write_str(label)
    }
}

/// A student enrolled in a course.
///
/// Every field is validated when it is assigned, so a `Student` is either
/// fully unset (see [`Student::default`]) or holds values that satisfy the
/// character-class rules. Values keep the casing they were given; the
/// getters present them in title case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Student {
    first_name: String,
    last_name: String,
    course_name: String,
}

impl Student {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mut student = Self::default();
        student.set_first_name(first_name)?;
        student.set_last_name(last_name)?;
        student.set_course_name(course_name)?;
        Ok(student)
    }

    /// Rebuilds a student from its persisted form, re-applying validation.
    pub fn from_record(record: &StudentRecord) -> Result<Self, ValidationError> {
        Self::new(
            record.first_name.as_str(),
            record.last_name.as_str(),
            record.course_name.as_str(),
        )
    }

    pub fn first_name(&self) -> String {
        title_case(&self.first_name)
    }

    pub fn last_name(&self) -> String {
        title_case(&self.last_name)
    }

    pub fn course_name(&self) -> String {
        title_case(&self.course_name)
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        validate_person_name(Field::FirstName, &value)?;
        self.first_name = value;
        Ok(())
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        validate_person_name(Field::LastName, &value)?;
        self.last_name = value;
        Ok(())
    }

    pub fn set_course_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        validate_course_name(&value)?;
        self.course_name = value;
        Ok(())
    }

    pub fn is_unset(&self) -> bool {
        self.first_name.is_empty() && self.last_name.is_empty() && self.course_name.is_empty()
    }

    /// The persisted representation, holding the title-cased values.
    pub fn to_record(&self) -> StudentRecord {
        StudentRecord {
            first_name: self.first_name(),
            last_name: self.last_name(),
            course_name: self.course_name(),
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.first_name(),
            self.last_name(),
            self.course_name()
        )
    }
}

/// One entry of the enrollment file.
///
/// Loaded records are trusted as previously validated and are not checked
/// again; use [`Student::from_record`] when that guarantee is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "CourseName")]
    pub course_name: String,
}

impl StudentRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            course_name: course_name.into(),
        }
    }

    /// "Student {first} {last} is enrolled in {course}"
    pub fn enrollment_line(&self) -> String {
        format!(
            "Student {} {} is enrolled in {}",
            self.first_name, self.last_name, self.course_name
        )
    }
}

impl From<&Student> for StudentRecord {
    fn from(student: &Student) -> Self {
        student.to_record()
    }
}
