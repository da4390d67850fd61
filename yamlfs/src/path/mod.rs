//! Lexical path handling.
//!
//! Paths here are plain strings with a caller-chosen separator byte, so the
//! same code handles `/`-separated and `\`-separated paths regardless of the
//! host platform. Nothing in this module touches the file system.
//!
//! # Cleaning
//!
//! [`clean`] rewrites a path into its shortest lexically equivalent form:
//! doubled separators collapse, `.` segments disappear and `..` segments
//! cancel the segment before them.
//!
//! # Common prefixes
//!
//! [`common_prefix`] finds the deepest directory shared by a set of paths.
//! The result always ends on a whole segment:
//!
//! ```
//! use yamlfs::path::common_prefix;
//!
//! let paths = ["/etc/app/base.yaml", "/etc/app/overlays/prod.yaml"];
//! assert_eq!(common_prefix(b'/', &paths), "/etc/app");
//!
//! // "/a/bc" and "/a/bd" share the directory "/a", not the text "/a/b"
//! assert_eq!(common_prefix(b'/', &["/a/bc", "/a/bd"]), "/a");
//! ```

mod clean;
mod prefix;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use clean::clean;
pub use prefix::{common_prefix, common_prefix_native};
