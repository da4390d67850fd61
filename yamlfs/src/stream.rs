//! Opening and releasing input streams.
//!
//! [`open_stream`] turns a user-supplied path into something readable, with
//! `-` standing for standard input. [`close_file`] releases a handle on a
//! best-effort basis: failures are logged, never returned, so cleanup cannot
//! mask the result of the work that came before it.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Stdin};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Path value that selects standard input instead of a file.
pub const STDIN_SENTINEL: &str = "-";

/// A readable stream over either standard input or an opened file.
///
/// Standard input is owned by the process; releasing a `Stdin` stream never
/// closes it.
pub enum InputStream {
    /// Buffered standard input.
    Stdin(BufReader<Stdin>),
    /// A file opened for reading.
    File {
        /// The path the file was opened from.
        path: PathBuf,
        /// The buffered file handle.
        reader: BufReader<File>,
    },
}

impl InputStream {
    /// Returns true if this stream reads from standard input.
    #[must_use]
    pub const fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin(_))
    }

    /// The path this stream was opened from, if it is a file.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdin(_) => None,
            Self::File { path, .. } => Some(path),
        }
    }

    /// A human-readable name for the stream, used in messages.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Stdin(_) => "<stdin>".to_string(),
            Self::File { path, .. } => path.display().to_string(),
        }
    }
}

impl fmt::Debug for InputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InputStream").field(&self.name()).finish()
    }
}

impl Read for InputStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Stdin(reader) => reader.read(buf),
            Self::File { reader, .. } => reader.read(buf),
        }
    }
}

impl BufRead for InputStream {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Self::Stdin(reader) => reader.fill_buf(),
            Self::File { reader, .. } => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            Self::Stdin(reader) => reader.consume(amt),
            Self::File { reader, .. } => reader.consume(amt),
        }
    }
}

/// Open `path` for reading, or standard input when `path` is `-`.
///
/// There is no escape for a file literally named `-`; pass `./-` instead.
///
/// # Errors
///
/// Returns [`Error::Open`] if the file cannot be opened.
///
/// # Examples
///
/// ```
/// use yamlfs::stream::open_stream;
///
/// let stdin = open_stream("-").unwrap();
/// assert!(stdin.is_stdin());
///
/// assert!(open_stream("/definitely/not/here.yaml").is_err());
/// ```
pub fn open_stream(path: &str) -> Result<InputStream> {
    if path == STDIN_SENTINEL {
        log::debug!("reading from standard input");
        return Ok(InputStream::Stdin(BufReader::new(io::stdin())));
    }

    open_path(Path::new(path))
}

/// Open the file at `path` for reading.
///
/// Unlike [`open_stream`], `-` is an ordinary file name here.
///
/// # Errors
///
/// Returns [`Error::Open`] if the file cannot be opened.
pub fn open_path(path: &Path) -> Result<InputStream> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("opened {}", path.display());

    Ok(InputStream::File {
        path: path.to_path_buf(),
        reader: BufReader::new(file),
    })
}

/// A handle that can be released with a reportable status.
pub trait Close {
    /// Release the handle, reporting any failure.
    ///
    /// # Errors
    ///
    /// Returns the OS error raised while releasing the handle.
    fn close(self) -> io::Result<()>;
}

impl Close for File {
    #[cfg(unix)]
    fn close(self) -> io::Result<()> {
        // Dropping a File discards the close(2) status, so the reported
        // status is the fsync one: pending write-back errors surface here.
        match self.sync_all() {
            Err(e) if e.kind() == io::ErrorKind::InvalidInput => Ok(()),
            other => other,
        }
    }

    #[cfg(not(unix))]
    fn close(self) -> io::Result<()> {
        drop(self);
        Ok(())
    }
}

impl Close for InputStream {
    fn close(self) -> io::Result<()> {
        match self {
            Self::Stdin(_) => Ok(()),
            Self::File { reader, .. } => reader.into_inner().close(),
        }
    }
}

/// Release `handle`, logging instead of returning any failure.
///
/// For a [`File`] on Unix the status that gets logged is that of the
/// `fsync` performed before release (see [`Close`]), not of `close(2)`.
/// This syncs read-only inputs too.
///
/// # Examples
///
/// ```
/// use yamlfs::stream::{close_file, open_stream};
///
/// let stream = open_stream("-").unwrap();
/// close_file(stream);
/// ```
pub fn close_file<C: Close>(handle: C) {
    if let Err(e) = handle.close() {
        log::error!("error closing file: {e}");
    }
}
