//! Directory inspection and YAML file discovery.
//!
//! [`collect_yaml_files`] walks a tree depth first and returns every file
//! whose name ends in `.yaml` or `.yml`. [`expand_inputs`] builds on it to
//! turn the paths a user typed (files, directories, or `-`) into the ordered
//! list of sources a tool should read.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::stream::{open_path, open_stream, InputStream, STDIN_SENTINEL};

/// File name suffixes recognized as YAML. Matching is case-sensitive.
pub const YAML_EXTENSIONS: [&str; 2] = [".yaml", ".yml"];

/// Check whether `path` is a directory.
///
/// Symlinks are followed.
///
/// # Errors
///
/// Returns [`Error::Stat`] if the path cannot be stat'ed, for instance
/// because it does not exist.
///
/// # Examples
///
/// ```
/// use yamlfs::walk::is_directory;
///
/// let dir = std::env::temp_dir();
/// assert!(is_directory(&dir).unwrap());
/// assert!(is_directory("/definitely/not/here").is_err());
/// ```
pub fn is_directory(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|source| Error::Stat {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(metadata.is_dir())
}

/// Check whether a file name carries a YAML extension.
///
/// The name is compared as raw bytes, so names that are not valid UTF-8
/// still match.
///
/// # Examples
///
/// ```
/// use yamlfs::walk::is_yaml_file;
/// use std::path::Path;
///
/// assert!(is_yaml_file(Path::new("deploy/app.yaml")));
/// assert!(is_yaml_file(Path::new("values.yml")));
/// assert!(!is_yaml_file(Path::new("notes.txt")));
/// assert!(!is_yaml_file(Path::new("SHOUT.YAML")));
/// ```
#[must_use]
pub fn is_yaml_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        let name = name.as_encoded_bytes();
        YAML_EXTENSIONS
            .iter()
            .any(|ext| name.ends_with(ext.as_bytes()))
    })
}

/// Collect every YAML file under `root`.
///
/// The walk is depth first and pre-order, with the entries of each directory
/// visited in file name order. Directories are never returned, and symlinks
/// are not followed, `root` included: a symlinked root is reported as a
/// single entry and only returned if its own name is a YAML name. If `root`
/// is itself a YAML file it is the only result.
///
/// Returned paths start with `root` exactly as given, so a relative root
/// yields relative paths.
///
/// # Errors
///
/// Returns [`Error::Walk`] if any part of the walk fails (missing root,
/// unreadable directory, ...). Nothing collected before the failure is
/// returned.
pub fn collect_yaml_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    log::debug!("collecting YAML files under {}", root.display());

    let mut results = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .follow_root_links(false)
        .sort_by_file_name() {
        let entry = entry.map_err(|source| Error::Walk {
            root: root.to_path_buf(),
            source,
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        if is_yaml_file(entry.path()) {
            results.push(entry.into_path());
        }
    }

    log::debug!("found {} YAML file(s) under {}", results.len(), root.display());
    Ok(results)
}

/// Where a tool should read one input from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum InputSource {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl InputSource {
    /// Open this source for reading.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file cannot be opened.
    pub fn open(&self) -> Result<InputStream> {
        match self {
            Self::Stdin => open_stream(STDIN_SENTINEL),
            Self::File(path) => open_path(path),
        }
    }

    /// A human-readable name for the source.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Expand user-supplied inputs into the sources to read, in order.
///
/// - `-` selects standard input.
/// - A directory expands to the YAML files beneath it (see
///   [`collect_yaml_files`]).
/// - Anything else is taken as a single file, whatever its extension.
///
/// # Errors
///
/// Returns an error if an input cannot be stat'ed or a directory walk fails.
///
/// # Examples
///
/// ```
/// use yamlfs::walk::{expand_inputs, InputSource};
///
/// let sources = expand_inputs(["-"]).unwrap();
/// assert_eq!(sources, vec![InputSource::Stdin]);
/// ```
pub fn expand_inputs<I, S>(inputs: I) -> Result<Vec<InputSource>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sources = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if input == STDIN_SENTINEL {
            sources.push(InputSource::Stdin);
        } else if is_directory(input)? {
            sources.extend(collect_yaml_files(input)?.into_iter().map(InputSource::File));
        } else {
            sources.push(InputSource::File(PathBuf::from(input)));
        }
    }
    Ok(sources)
}
