#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # yamlfs
//!
//! File-system helpers for tools that read YAML from files, directories and
//! standard input.
//!
//! ## Core Operations
//!
//! - [`open_stream`] and [`close_file`]: Open a path (or `-` for stdin) and
//!   release it again without letting cleanup failures escape
//! - [`common_prefix`]: Deepest directory shared by a set of paths
//! - [`collect_yaml_files`] and [`is_directory`]: Walk a tree for YAML files
//! - [`expand_inputs`]: Turn command-line inputs into readable sources
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: stderr backend for the `log` facade
//!
//! ## Examples
//!
//! ```
//! use yamlfs::{common_prefix, open_stream};
//!
//! let prefix = common_prefix(b'/', &["/srv/app/a.yaml", "/srv/app/conf/b.yaml"]);
//! assert_eq!(prefix, "/srv/app");
//!
//! let stdin = open_stream("-").unwrap();
//! assert!(stdin.is_stdin());
//! ```

pub mod document;
pub mod error;
pub mod logging;
pub mod path;
pub mod stream;
pub mod walk;

// Re-export key types at crate root for convenience
pub use document::{load_documents, read_documents};
pub use error::{Error, Result};
pub use logging::{init_logger, install_logger, LogLevel, Logger};
pub use path::{clean, common_prefix, common_prefix_native};
pub use stream::{close_file, open_path, open_stream, Close, InputStream, STDIN_SENTINEL};
pub use walk::{collect_yaml_files, expand_inputs, is_directory, is_yaml_file, InputSource};
