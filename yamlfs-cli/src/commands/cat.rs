//! Command to copy a file or standard input to stdout.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::io;
use yamlfs::{close_file, open_stream};

/// Copy a file (or `-` for stdin) to stdout.
#[derive(Args)]
pub struct CatCommand {
    /// File to read, or `-` for standard input
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl CatCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut stream = open_stream(&self.path)?;

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let copied = io::copy(&mut stream, &mut handle);

        // Release before reporting so a close failure never hides the copy result
        close_file(stream);
        copied?;
        Ok(())
    }
}
