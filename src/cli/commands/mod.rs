//! Command implementations for omnidraft.
//!
//! Every command reads a shorthand document the same way; they differ only
//! in what happens to the parsed tasks (send, print, or inspect).

mod completions;
mod convert;
mod parse;
mod send;

pub use completions::completions;
pub use convert::convert;
pub use parse::parse;
pub use send::send;

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::cli::args::CaptureArgs;
use crate::config::Config;
use crate::error::OmnidraftError;
use crate::shorthand::GlobalDirectives;

/// Read the shorthand document named by the capture arguments.
///
/// `--text` wins over the input file; a file of `-` (or no file at all)
/// reads stdin to end.
///
/// # Errors
///
/// Returns `OmnidraftError::Input` if the file cannot be read, or an I/O
/// error if stdin fails.
fn read_document(args: &CaptureArgs) -> Result<String, OmnidraftError> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    match &args.input {
        Some(path) if path.as_os_str() != "-" => read_file(path),
        _ => read_stdin(),
    }
}

fn read_file(path: &Path) -> Result<String, OmnidraftError> {
    fs::read_to_string(path).map_err(|e| OmnidraftError::Input(format!("{}: {e}", path.display())))
}

fn read_stdin() -> Result<String, OmnidraftError> {
    let mut text = String::new();
    std::io::stdin().lock().read_to_string(&mut text)?;
    Ok(text)
}

/// Fold CLI flags and configuration into directive overrides.
///
/// `--tag` values come first, then `capture.extra_tags` from the config;
/// both end up after the document's own global tags. The date flags
/// replace document directives outright.
fn capture_overrides(args: &CaptureArgs, config: &Config) -> GlobalDirectives {
    let mut tags = args.tags.clone();
    for tag in &config.capture.extra_tags {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    GlobalDirectives {
        tags,
        defer: args.defer.clone(),
        due: args.due.clone(),
    }
}
