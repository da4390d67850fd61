//! Find command implementation.
//!
//! This module implements the `find` command, which lists every YAML file
//! under one or more roots in walk order.

use crate::error::CliError;
use crate::utils::{write_json, GlobalOptions, OutputFormat};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use yamlfs::collect_yaml_files;

/// List YAML files under directories.
#[derive(Args)]
pub struct FindCommand {
    /// Directories (or files) to search
    #[arg(value_name = "ROOT", required = true)]
    pub roots: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl FindCommand {
    /// Execute the find command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        // Collect everything first so a failing root prints nothing
        let mut files = Vec::new();
        for root in &self.roots {
            files.extend(collect_yaml_files(root)?);
        }

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        match self.format {
            OutputFormat::Text => {
                for file in &files {
                    writeln!(handle, "{}", file.display())?;
                }
            }
            OutputFormat::Json => write_json(&mut handle, &files)?,
        }

        Ok(())
    }
}
