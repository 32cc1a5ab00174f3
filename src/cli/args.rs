use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "omnidraft")]
#[command(about = "Batch-capture tasks into OmniFocus from a line shorthand")]
#[command(long_about = "omnidraft - bulk task capture for OmniFocus

Converts a line-oriented shorthand into TaskPaper text and pastes it into
OmniFocus through its x-callback-url scheme. Write one task per line and
let directive lines fill in the defaults.

SHORTHAND:
  Write presentation !Friday #work        task with due date and tag
  Research gifts @1w !(5/12/2019)         defer and an exact due date
  Asparagus #shopping --buy two bunches   -- starts a note

DIRECTIVE LINES (apply to every task that lacks its own value):
  #personal errands    add these tags to every task
  @2d                  default defer date
  !Friday              default due date

QUICK START:
  pbpaste | omnidraft send        Paste the clipboard into OmniFocus
  omnidraft send inbox.txt        Capture a file
  omnidraft convert inbox.txt     Print the TaskPaper text instead
  omnidraft parse inbox.txt       Inspect what would be captured

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  omnidraft <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    /// Falls back to general.default_output from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert shorthand and paste it into OmniFocus
    ///
    /// Reads the document, renders TaskPaper, and opens the OmniFocus
    /// paste callback once for the whole batch. This is the default
    /// capture flow.
    ///
    /// # Examples
    ///
    ///   omnidraft send inbox.txt
    ///   pbpaste | omnidraft send
    ///   omnidraft send --text "Buy milk #errands" --defer 1d
    ///   omnidraft send inbox.txt --dry-run
    ///
    /// # Input Sources
    ///
    ///   FILE        read the named file
    ///   "-"         read stdin explicitly
    ///   (nothing)   read stdin
    ///   --text      inline shorthand, wins over FILE
    #[command(alias = "s")]
    Send(SendArgs),

    /// Convert shorthand and print the TaskPaper text
    ///
    /// Same conversion as 'send' but the result goes to stdout instead of
    /// OmniFocus. Useful for piping into other tools or checking exactly
    /// what would be pasted.
    ///
    /// # Examples
    ///
    ///   omnidraft convert inbox.txt
    ///   pbpaste | omnidraft convert | pbcopy
    ///   omnidraft convert inbox.txt -o json
    #[command(alias = "c")]
    Convert(CaptureArgs),

    /// Parse shorthand and show the structured tasks
    ///
    /// Shows how each line breaks down into title, tags, dates, and note
    /// without converting or sending anything. Use it to debug a document
    /// before capture.
    ///
    /// # Examples
    ///
    ///   omnidraft parse inbox.txt
    ///   omnidraft parse --text "call mom @Saturday #family"
    ///   omnidraft parse inbox.txt -o json | jq '.tasks[].title'
    #[command(alias = "p")]
    Parse(CaptureArgs),

    /// Generate shell completion scripts
    ///
    /// # Examples
    ///
    ///   omnidraft completions zsh > ~/.zsh/completions/_omnidraft
    ///   source <(omnidraft completions bash)
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

/// Arguments shared by all capture commands.
#[derive(Args, Debug, Clone, Default)]
pub struct CaptureArgs {
    /// Input file with shorthand text; "-" or omitted reads stdin
    pub input: Option<PathBuf>,

    /// Inline shorthand text (wins over the input file)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Extra tag applied to every task (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Defer date for every task, replacing any @ directive lines
    #[arg(long, value_name = "DATE")]
    pub defer: Option<String>,

    /// Due date for every task, replacing any ! directive lines
    #[arg(long, value_name = "DATE")]
    pub due: Option<String>,
}

/// Arguments for the send command.
#[derive(Args, Debug, Clone, Default)]
pub struct SendArgs {
    #[command(flatten)]
    pub capture: CaptureArgs,

    /// Show the TaskPaper text and callback URL without opening OmniFocus
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}
