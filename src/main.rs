use clap::Parser;
use colored::Colorize;

use omnidraft::cli::args::{Cli, Commands};
use omnidraft::cli::commands;
use omnidraft::config::Config;
use omnidraft::error::OmnidraftError;
use omnidraft::omnifocus::OmniFocusClient;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), OmnidraftError> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Send(args) => {
            let client = OmniFocusClient::with_url_base(&config.omnifocus.url_base);
            commands::send(&client, &args, &config, format)?
        }
        Commands::Convert(args) => commands::convert(&args, &config, format)?,
        Commands::Parse(args) => commands::parse(&args, &config, format)?,
        Commands::Completions { shell } => commands::completions(&shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
