//! Main entry point for the yamlfs CLI.
//!
//! This is the command-line interface over the yamlfs helpers.
//! It provides commands for working with YAML inputs:
//! - `cat`: Copy a file or stdin to stdout
//! - `find`: List YAML files under directories
//! - `prefix`: Print the common directory prefix of paths
//! - `is-dir`: Report whether a path is a directory
//! - `check`: Parse inputs as YAML

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library diagnostics to stderr at the requested verbosity
    yamlfs::install_logger(yamlfs::init_logger(cli.verbose, cli.quiet));

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Cat(cmd) => cmd.execute(&global),
        cli::Command::Find(cmd) => cmd.execute(&global),
        cli::Command::Prefix(cmd) => cmd.execute(&global),
        cli::Command::IsDir(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
