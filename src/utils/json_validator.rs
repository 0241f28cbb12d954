//! Guarded JSON parsing for documents read from disk.

use anyhow::{Context, Result};
use serde_json::Value;

/// Maximum allowed JSON depth to prevent stack overflow attacks.
pub const MAX_JSON_DEPTH: usize = 100;

/// Maximum allowed JSON document size (10MB).
pub const MAX_JSON_SIZE: usize = 10 * 1024 * 1024;

/// Checks the size and nesting depth of a JSON document and returns the
/// parsed value.
///
/// # Example
/// ```rust
/// use course_registration::utils::json_validator;
///
/// let value = json_validator::parse_json_checked(r#"[{"FirstName": "Ada"}]"#)?;
/// assert!(value.is_array());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn parse_json_checked(json_str: &str) -> Result<Value> {
    if json_str.len() > MAX_JSON_SIZE {
        anyhow::bail!(
            "JSON input too large: {} bytes exceeds maximum of {} bytes",
            json_str.len(),
            MAX_JSON_SIZE
        );
    }

    let value: Value = serde_json::from_str(json_str).context("Invalid JSON syntax")?;

    let depth = calculate_json_depth(&value);
    if depth > MAX_JSON_DEPTH {
        anyhow::bail!(
            "JSON nesting too deep: {} levels exceeds maximum of {}",
            depth,
            MAX_JSON_DEPTH
        );
    }

    Ok(value)
}

fn calculate_json_depth(value: &Value) -> usize {
    match value {
        Value::Object(map) => 1 + map.values().map(calculate_json_depth).max().unwrap_or(0),
        Value::Array(arr) => 1 + arr.iter().map(calculate_json_depth).max().unwrap_or(0),
        _ => 1,
    }
}
