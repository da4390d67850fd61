//! Command to report whether a path is a directory.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::PathBuf;
use yamlfs::is_directory;

/// Report whether a path is a directory.
///
/// Prints `true` or `false`. With `--assert`, a non-directory also exits
/// with code 1.
#[derive(Args)]
pub struct IsDirCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Fail unless the path is a directory
    #[arg(long)]
    pub assert: bool,
}

impl IsDirCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let is_dir = is_directory(&self.path)?;
        println!("{is_dir}");

        if self.assert && !is_dir {
            return Err(CliError::SemanticFailure(format!(
                "Not a directory: {}",
                self.path.display()
            )));
        }

        Ok(())
    }
}
