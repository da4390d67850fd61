//! Lexical path cleaning.
//!
//! Cleaning rewrites a path string into its shortest equivalent form without
//! touching the file system:
//! - Repeated separators collapse to one
//! - `.` segments are removed
//! - `..` segments cancel the segment before them
//! - Trailing separators are dropped (except for the root itself)
//!
//! Symlinks are never resolved, so `a/link/..` cleans to `a` even if `link`
//! points elsewhere.

/// Segment that refers to the current directory.
const CUR_DIR: &str = ".";

/// Segment that refers to the parent directory.
const PARENT_DIR: &str = "..";

/// Clean `path` lexically, using `sep` as the segment separator.
///
/// `sep` is expected to be an ASCII byte such as `b'/'` or `b'\\'`.
///
/// The rules are applied in order:
/// 1. Repeated separators are replaced by a single one.
/// 2. Each `.` segment is eliminated.
/// 3. Each `..` segment is eliminated along with the non-`..` segment that
///    precedes it.
/// 4. `..` segments that begin a rooted path are eliminated.
/// 5. A trailing separator is removed unless the result is the root.
///
/// An empty result becomes `"."`.
///
/// # Examples
///
/// ```
/// use yamlfs::path::clean;
///
/// assert_eq!(clean("/a/./b/../c", b'/'), "/a/c");
/// assert_eq!(clean("a//b/", b'/'), "a/b");
/// assert_eq!(clean("/../x", b'/'), "/x");
/// assert_eq!(clean("../x", b'/'), "../x");
/// assert_eq!(clean("", b'/'), ".");
/// ```
#[must_use]
pub fn clean(path: &str, sep: u8) -> String {
    let sep = char::from(sep);
    if path.is_empty() {
        return CUR_DIR.to_string();
    }

    let rooted = path.starts_with(sep);
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split(sep) {
        match segment {
            "" | CUR_DIR => {}
            PARENT_DIR => {
                if segments.last().is_some_and(|last| *last != PARENT_DIR) {
                    segments.pop();
                } else if !rooted {
                    // Nothing left to cancel in a relative path
                    segments.push(PARENT_DIR);
                }
            }
            _ => segments.push(segment),
        }
    }

    let joined = segments.join(sep.to_string().as_str());
    if rooted {
        format!("{sep}{joined}")
    } else if joined.is_empty() {
        CUR_DIR.to_string()
    } else {
        joined
    }
}
