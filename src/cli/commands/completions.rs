//! Shell completions generation.
//!
//! Generates completion scripts for bash, zsh, fish, PowerShell, and
//! elvish.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::OmnidraftError;

/// Execute the completions command.
///
/// # Errors
///
/// Returns `OmnidraftError::UnsupportedShell` when the shell name is not
/// recognized.
pub fn completions(shell: &str) -> Result<String, OmnidraftError> {
    let shell = shell_from_str(shell)
        .ok_or_else(|| OmnidraftError::UnsupportedShell(shell.to_string()))?;
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "omnidraft", &mut buf);
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Get shell from string name.
fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}
