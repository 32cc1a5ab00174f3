//! JSON output formatting for omnidraft.

use serde::Serialize;
use serde_json::json;

use crate::error::OmnidraftError;
use crate::shorthand::Task;

/// Format parsed tasks as JSON
///
/// # Errors
///
/// Returns `OmnidraftError::Json` if serialization fails.
pub fn format_tasks_json(tasks: &[Task]) -> Result<String, OmnidraftError> {
    let output = json!({
        "count": tasks.len(),
        "tasks": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a finished conversion (tasks plus rendered TaskPaper) as JSON
///
/// # Errors
///
/// Returns `OmnidraftError::Json` if serialization fails.
pub fn format_conversion_json(tasks: &[Task], content: &str) -> Result<String, OmnidraftError> {
    let output = json!({
        "count": tasks.len(),
        "tasks": tasks,
        "content": content
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `OmnidraftError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, OmnidraftError> {
    Ok(serde_json::to_string_pretty(value)?)
}
