//! Output formatting for omnidraft.
//!
//! This module provides formatters for showing parsed tasks and finished
//! conversions in pretty or JSON form.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::OmnidraftError;
use crate::shorthand::Task;

pub use json::*;
pub use pretty::*;

/// Format parsed tasks based on output format
///
/// # Errors
///
/// Returns `OmnidraftError::Json` if JSON serialization fails.
pub fn format_tasks(tasks: &[Task], format: OutputFormat) -> Result<String, OmnidraftError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks)),
        OutputFormat::Json => format_tasks_json(tasks),
    }
}

/// Format a finished conversion based on output format
///
/// Pretty output is the TaskPaper text itself, uncolored and without the
/// final newline so it pipes cleanly; JSON wraps the tasks and the
/// rendered content.
///
/// # Errors
///
/// Returns `OmnidraftError::Json` if JSON serialization fails.
pub fn format_conversion(
    tasks: &[Task],
    content: &str,
    format: OutputFormat,
) -> Result<String, OmnidraftError> {
    match format {
        OutputFormat::Pretty => Ok(content.trim_end_matches('\n').to_string()),
        OutputFormat::Json => format_conversion_json(tasks, content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(title: &str) -> Task {
        Task {
            title: title.to_string(),
            ..Task::default()
        }
    }

    #[test]
    fn test_format_tasks_dispatches_pretty() {
        let out = format_tasks(&[make_task("Buy milk")], OutputFormat::Pretty).unwrap();
        assert!(out.contains("Buy milk"));
        assert!(!out.contains('{'));
    }

    #[test]
    fn test_format_tasks_dispatches_json() {
        let out = format_tasks(&[make_task("Buy milk")], OutputFormat::Json).unwrap();
        assert!(out.contains("\"title\": \"Buy milk\""));
    }

    #[test]
    fn test_format_conversion_pretty_drops_final_newline() {
        let out =
            format_conversion(&[make_task("one")], "- one \n", OutputFormat::Pretty).unwrap();
        assert_eq!(out, "- one ");
    }

    #[test]
    fn test_format_conversion_json_keeps_content_verbatim() {
        let out = format_conversion(&[make_task("one")], "- one \n", OutputFormat::Json).unwrap();
        assert!(out.contains("\"content\": \"- one \\n\""));
    }
}
