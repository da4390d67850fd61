//! Command to print the common directory prefix of a set of paths.

use crate::error::CliError;
use crate::utils::{default_separator, parse_separator, GlobalOptions};
use clap::Args;
use yamlfs::common_prefix;

/// Print the deepest directory shared by all paths.
#[derive(Args)]
pub struct PrefixCommand {
    /// Paths to compare (lexically; they need not exist)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Path separator [default: host separator]
    #[arg(long, short = 's', value_name = "CHAR", value_parser = parse_separator)]
    pub separator: Option<u8>,
}

impl PrefixCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let sep = self.separator.unwrap_or_else(default_separator);
        println!("{}", common_prefix(sep, self.paths.as_slice()));
        Ok(())
    }
}
