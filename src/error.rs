//! Error types for omnidraft.

use thiserror::Error;

/// Errors surfaced by capture commands and the OmniFocus handoff.
///
/// Shorthand parsing itself never fails; malformed lines are captured
/// best-effort. Everything here is boundary trouble: unreadable input,
/// bad configuration, or a rejected delivery.
#[derive(Error, Debug)]
pub enum OmnidraftError {
    /// I/O failure reading input or spawning the handoff process.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file is malformed or unwritable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input file could not be read.
    #[error("Cannot read input: {0}")]
    Input(String),

    /// Completion generation was asked for a shell we do not know.
    #[error("Unsupported shell: {0} (expected bash, zsh, fish, powershell, or elvish)")]
    UnsupportedShell(String),

    /// No application is registered for the OmniFocus URL scheme.
    #[error("OmniFocus is not available (nothing handles the omnifocus:// URL scheme)")]
    OmniFocusUnavailable,

    /// The handoff ran but OmniFocus (or `open`) rejected it.
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

impl OmnidraftError {
    /// Classify stderr from a failed `open` invocation.
    #[must_use]
    pub fn from_open_stderr(stderr: &str) -> Self {
        let trimmed = stderr.trim();
        if trimmed.contains("Unable to find application")
            || trimmed.contains("No application knows how to open")
        {
            Self::OmniFocusUnavailable
        } else if trimmed.is_empty() {
            Self::Delivery("open exited with a failure status".to_string())
        } else {
            Self::Delivery(trimmed.to_string())
        }
    }
}
