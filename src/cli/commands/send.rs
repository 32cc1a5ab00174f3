//! Send command implementation.
//!
//! The full capture flow: parse, render, and hand the TaskPaper text to
//! OmniFocus in a single paste. Delivery happens exactly once for the
//! whole document, even when the document is empty.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{OutputFormat, SendArgs};
use crate::config::Config;
use crate::error::OmnidraftError;
use crate::omnifocus::{Deliverer, OmniFocusClient};
use crate::output::to_json;
use crate::shorthand::parse_document_with;
use crate::taskpaper;

/// Execute the send command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, JSON formatting fails,
/// or the OmniFocus handoff is rejected. Delivery is attempted once; a
/// failure is reported to the caller with no retry.
pub fn send(
    deliverer: &dyn Deliverer,
    args: &SendArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, OmnidraftError> {
    let text = super::read_document(&args.capture)?;
    let overrides = super::capture_overrides(&args.capture, config);
    let tasks = parse_document_with(&text, &overrides);
    let content = taskpaper::render(&tasks);

    if args.dry_run {
        return dry_run_report(tasks.len(), &content, config, format);
    }

    deliverer.deliver(&content)?;

    match format {
        OutputFormat::Json => to_json(&json!({
            "sent": true,
            "count": tasks.len(),
        })),
        OutputFormat::Pretty => {
            let noun = if tasks.len() == 1 { "task" } else { "tasks" };
            Ok(format!(
                "{} {} {noun} to OmniFocus",
                "Sent:".green().bold(),
                tasks.len()
            ))
        }
    }
}

fn dry_run_report(
    count: usize,
    content: &str,
    config: &Config,
    format: OutputFormat,
) -> Result<String, OmnidraftError> {
    let url = OmniFocusClient::with_url_base(&config.omnifocus.url_base).paste_url(content);

    match format {
        OutputFormat::Json => to_json(&json!({
            "sent": false,
            "dry_run": true,
            "count": count,
            "content": content,
            "url": url,
        })),
        OutputFormat::Pretty => {
            let mut output = format!("{}\n", "Dry run (nothing sent)".yellow().bold());
            if content.is_empty() {
                output.push_str(&format!("{}\n", "(empty document)".dimmed()));
            } else {
                output.push_str(content);
            }
            output.push_str(&format!("{}\n", "─".repeat(60)));
            output.push_str(&format!("{} {url}\n", "URL:".dimmed()));
            Ok(output)
        }
    }
}
