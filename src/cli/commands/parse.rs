//! Parse command implementation.
//!
//! Shows the structured tasks a document would produce, without rendering
//! TaskPaper or touching OmniFocus.

use crate::cli::args::{CaptureArgs, OutputFormat};
use crate::config::Config;
use crate::error::OmnidraftError;
use crate::output::format_tasks;
use crate::shorthand::parse_document_with;

/// Execute the parse command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or JSON formatting fails.
pub fn parse(
    args: &CaptureArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, OmnidraftError> {
    let text = super::read_document(args)?;
    let overrides = super::capture_overrides(args, config);
    let tasks = parse_document_with(&text, &overrides);
    format_tasks(&tasks, format)
}
