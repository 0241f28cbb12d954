//! Test fixtures for enrollment data

use std::fs;
use std::path::{Path, PathBuf};

use crate::student::StudentRecord;

/// A small collection in registration order, including a duplicate entry.
pub fn sample_records() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new("Ada", "Lovelace", "Math 101"),
        StudentRecord::new("Alan", "Turing", "Computability"),
        StudentRecord::new("Ada", "Lovelace", "Math 101"),
    ]
}

/// Writes `contents` as the enrollment file inside `dir` and returns its path.
pub fn write_enrollment_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join(crate::storage::DEFAULT_FILE_NAME);
    fs::write(&path, contents).expect("failed to write enrollment fixture");
    path
}

/// The enrollment file for [`sample_records`], as the program writes it.
pub fn sample_enrollment_json() -> String {
    let mut json = serde_json::to_string_pretty(&sample_records())
        .expect("sample records always serialize");
    json.push('\n');
    json
}
