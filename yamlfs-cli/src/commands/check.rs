//! Check command implementation.
//!
//! This module implements the `check` command, which parses every input as
//! YAML. Directories expand to the YAML files beneath them and `-` reads
//! standard input.

use crate::error::CliError;
use crate::utils::{write_json, GlobalOptions, OutputFormat};
use clap::Args;
use serde::Serialize;
use std::io::Write;
use yamlfs::{close_file, expand_inputs, load_documents, InputSource};

/// Parse inputs as YAML and report how many documents each holds.
#[derive(Args)]
pub struct CheckCommand {
    /// Files, directories, or `-` for standard input
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

/// Outcome of parsing one input.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Where the input was read from.
    pub source: InputSource,
    /// Number of documents parsed, when parsing succeeded.
    pub documents: Option<usize>,
    /// Parse error message, when parsing failed.
    pub error: Option<String>,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let sources = expand_inputs(&self.inputs)?;
        let reports = sources
            .into_iter()
            .map(check_source)
            .collect::<Result<Vec<_>, CliError>>()?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            OutputFormat::Text => {
                if !global.quiet {
                    for report in &reports {
                        write_text_report(&mut handle, report)?;
                    }
                }
            }
            OutputFormat::Json => write_json(&mut handle, &reports)?,
        }

        let invalid = reports.iter().filter(|r| r.error.is_some()).count();
        if invalid > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{invalid} of {} input(s) are not valid YAML",
                reports.len()
            )));
        }

        Ok(())
    }
}

/// Open, parse and release one source.
///
/// Open failures abort the command; parse failures are recorded in the
/// report so the remaining inputs are still checked.
fn check_source(source: InputSource) -> Result<CheckReport, CliError> {
    let mut stream = source.open()?;
    let parsed = load_documents(&mut stream);
    close_file(stream);

    let report = match parsed {
        Ok(documents) => CheckReport {
            source,
            documents: Some(documents.len()),
            error: None,
        },
        Err(e) => CheckReport {
            source,
            documents: None,
            error: Some(e.to_string()),
        },
    };
    Ok(report)
}

fn write_text_report<W: Write>(out: &mut W, report: &CheckReport) -> Result<(), CliError> {
    let name = report.source.name();
    match (&report.error, report.documents) {
        (Some(error), _) => writeln!(out, "{name}: invalid: {error}")?,
        (None, Some(count)) => writeln!(out, "{name}: ok ({count} document(s))")?,
        (None, None) => writeln!(out, "{name}: ok")?,
    }
    Ok(())
}
