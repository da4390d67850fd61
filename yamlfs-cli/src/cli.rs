//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CatCommand, CheckCommand, CompletionsCommand, FindCommand, IsDirCommand, PrefixCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for reading YAML from files, directories and stdin.
#[derive(Parser)]
#[command(name = "yamlfs")]
#[command(version, about = "Inspect YAML files, directories and stdin", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Copy a file (or `-` for stdin) to stdout
    Cat(CatCommand),

    /// List YAML files under directories
    Find(FindCommand),

    /// Print the common directory prefix of paths
    Prefix(PrefixCommand),

    /// Report whether a path is a directory
    IsDir(IsDirCommand),

    /// Parse inputs as YAML and report document counts
    Check(CheckCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
