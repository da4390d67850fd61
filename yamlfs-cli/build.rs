//! Build script for yamlfs-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("yamlfs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect YAML files, directories and stdin")
        .long_about(
            "Command-line tool for reading YAML from files, directory trees and standard input",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("cat")
                .about("Copy a file (or `-` for stdin) to stdout")
                .long_about("Open a file, or standard input when given `-`, and copy it to stdout"),
            Command::new("find")
                .about("List YAML files under directories")
                .long_about("Walk directories depth first and list every .yaml and .yml file"),
            Command::new("prefix")
                .about("Print the common directory prefix of paths")
                .long_about("Print the deepest directory shared by all given paths"),
            Command::new("is-dir")
                .about("Report whether a path is a directory")
                .long_about("Print true or false depending on whether the path is a directory"),
            Command::new("check")
                .about("Parse inputs as YAML and report document counts")
                .long_about("Parse files, directory trees and stdin as YAML and report failures"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("yamlfs.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
