//! Loading and saving the enrollment file.
//!
//! [`read_records`] and [`write_records`] are the strict operations and
//! return every failure. [`load_or_keep`] and [`save_or_report`] are what
//! the interactive session uses: failures are reported on the console and
//! never escape, and the caller's records are left as they were.

use std::io;
use std::path::Path;

use crate::console::Console;
use crate::error::{RegistrationError, Result};
use crate::logging;
use crate::student::StudentRecord;
use crate::utils::{atomic_file, json_validator};

/// The enrollment file, relative to the working directory.
pub const DEFAULT_FILE_NAME: &str = "Enrollments.json";

pub const READ_FAILURE_MESSAGE: &str = "Error: There was a problem with reading the file.";

pub const WRITE_FAILURE_MESSAGE: &str = "Error: There was a problem with writing to the file.\n\
     Please check that the file is not open by another program.";

/// Read every record from the enrollment file at `path`.
///
/// Record contents are trusted and not validated again.
pub fn read_records(path: &Path) -> Result<Vec<StudentRecord>> {
    let display = path.display().to_string();

    let contents = std::fs::read_to_string(path).map_err(|e| {
        RegistrationError::io_error("read enrollments", Some(display.clone()), e)
    })?;

    let value = json_validator::parse_json_checked(&contents).map_err(|e| {
        match e.downcast::<serde_json::Error>() {
            Ok(source) => RegistrationError::json_error(display.clone(), source),
            Err(e) => RegistrationError::Other(e.context(format!("Failed to parse {display}"))),
        }
    })?;

    serde_json::from_value(value).map_err(|e| RegistrationError::json_error(display, e))
}

/// Replace the enrollment file at `path` with `records`.
///
/// Output is pretty-printed with a trailing newline, so saving the same
/// records twice produces identical bytes.
pub fn write_records(path: &Path, records: &[StudentRecord]) -> Result<()> {
    let display = path.display().to_string();

    let mut json = serde_json::to_string_pretty(records)
        .map_err(|e| RegistrationError::json_error(display.clone(), e))?;
    json.push('\n');

    atomic_file::write_atomic(path, json.as_bytes()).map_err(|e| {
        match e.downcast::<io::Error>() {
            Ok(source) => RegistrationError::io_error("write enrollments", Some(display), source),
            Err(e) => RegistrationError::Other(e),
        }
    })
}

/// Load the enrollment file, falling back to `existing` on any failure.
///
/// A missing, unreadable or malformed file is reported on `console` and the
/// records passed in are returned unchanged.
pub fn load_or_keep(
    path: &Path,
    existing: Vec<StudentRecord>,
    console: &mut dyn Console,
) -> Vec<StudentRecord> {
    match read_records(path) {
        Ok(records) => {
            logging::log_records_loaded(path, records.len());
            records
        }
        Err(err) => {
            logging::log_load_failure(path, &err);
            console.show_error(READ_FAILURE_MESSAGE, Some(&err.technical_detail()));
            existing
        }
    }
}

/// Save `records`, reporting a failure on `console` instead of returning it.
///
/// Returns whether the file was written.
pub fn save_or_report(path: &Path, records: &[StudentRecord], console: &mut dyn Console) -> bool {
    match write_records(path, records) {
        Ok(()) => {
            logging::log_records_saved(path, records.len());
            true
        }
        Err(err) => {
            logging::log_save_failure(path, &err);
            console.show_error(WRITE_FAILURE_MESSAGE, Some(&err.technical_detail()));
            false
        }
    }
}
