//! Convert command implementation.
//!
//! Renders shorthand to TaskPaper on stdout, with no OmniFocus handoff.

use crate::cli::args::{CaptureArgs, OutputFormat};
use crate::config::Config;
use crate::error::OmnidraftError;
use crate::output::format_conversion;
use crate::shorthand::parse_document_with;
use crate::taskpaper;

/// Execute the convert command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or JSON formatting fails.
pub fn convert(
    args: &CaptureArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, OmnidraftError> {
    let text = super::read_document(args)?;
    let overrides = super::capture_overrides(args, config);
    let tasks = parse_document_with(&text, &overrides);
    let content = taskpaper::render(&tasks);
    format_conversion(&tasks, &content, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_args(text: &str) -> CaptureArgs {
        CaptureArgs {
            text: Some(text.to_string()),
            ..CaptureArgs::default()
        }
    }

    #[test]
    fn test_convert_pretty_is_taskpaper_text() {
        let out = convert(
            &text_args("Buy milk #errands"),
            &Config::default(),
            OutputFormat::Pretty,
        )
        .unwrap();
        assert_eq!(out, "- Buy milk @tags(errands) ");
    }

    #[test]
    fn test_convert_keeps_interior_newlines() {
        let out = convert(
            &text_args("one\ntwo --note"),
            &Config::default(),
            OutputFormat::Pretty,
        )
        .unwrap();
        assert_eq!(out, "- one \n- two \n\tnote");
    }

    #[test]
    fn test_convert_json_envelope() {
        let out = convert(
            &text_args("Buy milk #errands"),
            &Config::default(),
            OutputFormat::Json,
        )
        .unwrap();
        assert!(out.contains("\"count\": 1"));
        assert!(out.contains("\"title\": \"Buy milk\""));
        assert!(out.contains("\"content\""));
    }

    #[test]
    fn test_convert_applies_config_extra_tags() {
        let mut config = Config::default();
        config.capture.extra_tags = vec!["inbox".to_string()];
        let out = convert(&text_args("Buy milk"), &config, OutputFormat::Pretty).unwrap();
        assert_eq!(out, "- Buy milk @tags(inbox) ");
    }

    #[test]
    fn test_convert_flag_dates_override_directives() {
        let args = CaptureArgs {
            text: Some("task\n@2d".to_string()),
            defer: Some("1w".to_string()),
            ..CaptureArgs::default()
        };
        let out = convert(&args, &Config::default(), OutputFormat::Pretty).unwrap();
        assert_eq!(out, "- task @defer(1w) ");
    }

    #[test]
    fn test_convert_empty_document() {
        let out = convert(&text_args(""), &Config::default(), OutputFormat::Pretty).unwrap();
        assert_eq!(out, "");
    }
}
