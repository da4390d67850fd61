//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `cat`: Copy a file or stdin to stdout
//! - `find`: List YAML files under directories
//! - `prefix`: Print the common directory prefix of paths
//! - `is_dir`: Report whether a path is a directory
//! - `check`: Parse inputs as YAML and report document counts
//! - `completions`: Generate shell completion scripts

pub mod cat;
pub mod check;
pub mod completions;
pub mod find;
pub mod is_dir;
pub mod prefix;

pub use cat::CatCommand;
pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use find::FindCommand;
pub use is_dir::IsDirCommand;
pub use prefix::PrefixCommand;
