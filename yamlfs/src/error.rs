//! Error types for the yamlfs library.
//!
//! Every fallible helper returns [`Result`]. The I/O family of variants
//! (`Open`, `Stat`, `Walk`, `Io`) wraps the underlying OS error together with
//! the operation and path that produced it, using `thiserror` for the
//! `Display` and `source` plumbing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a yamlfs error.
///
/// # Examples
///
/// ```
/// use yamlfs::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the yamlfs library.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be opened for reading.
    #[error("unable to open {}: {source}", path.display())]
    Open {
        /// The path that could not be opened.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A path could not be stat'ed.
    #[error("could not get file info for {}: {source}", path.display())]
    Stat {
        /// The path that could not be stat'ed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A directory walk failed part way through.
    #[error("could not walk directory {}: {source}", root.display())]
    Walk {
        /// The root the walk started from.
        root: PathBuf,
        /// The underlying walk error.
        #[source]
        source: walkdir::Error,
    },

    /// A stream did not contain valid YAML.
    #[error("invalid YAML in {name}: {source}")]
    Yaml {
        /// Display name of the stream that failed to parse.
        name: String,
        /// The underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// An I/O error without further context.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Check if the error came from the operating system.
    ///
    /// # Examples
    ///
    /// ```
    /// use yamlfs::Error;
    ///
    /// let err = Error::from(std::io::Error::other("boom"));
    /// assert!(err.is_io());
    /// ```
    #[must_use]
    pub fn is_io(&self) -> bool {
        !matches!(self, Self::Yaml { .. })
    }

    /// Returns the underlying OS error, if there is one.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Open { source, .. } | Self::Stat { source, .. } => Some(source),
            Self::Walk { source, .. } => source.io_error(),
            Self::Io(source) => Some(source),
            Self::Yaml { .. } => None,
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use yamlfs::Error;
    /// use std::io;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::Stat {
    ///     path: PathBuf::from("/nonexistent"),
    ///     source: io::Error::from(io::ErrorKind::NotFound),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        self.io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::PermissionDenied)
    }
}
