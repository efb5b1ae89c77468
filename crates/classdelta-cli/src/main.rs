//! classdelta CLI
//!
//! Command-line interface for comparing two directories of compiled classes

use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod output;

#[derive(Debug, Parser)]
#[command(name = "classdelta")]
#[command(about = "classdelta - structural diff of compiled JVM classes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two snapshot directories
    Diff(commands::diff::DiffArgs),
    /// List every message key with its template
    Keys(commands::keys::KeysArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Keys(args) => commands::keys::execute(args),
    };

    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(commands::EXIT_FAILURE)
        }
    }
}
