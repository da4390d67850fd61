//! Longest common directory prefix of a set of paths.

use std::path::MAIN_SEPARATOR;

use super::clean::clean;

/// Returns the longest directory prefix shared by every path in `paths`.
///
/// Each path is [cleaned](clean) and given a trailing `sep` before the
/// comparison, so `/foo` and `/foobar` share `/` rather than `/foo`. The
/// byte-wise common prefix is then cut back to its last separator, which
/// means the result always ends on a whole segment.
///
/// - No paths gives `""`.
/// - A single path gives its cleaned form.
/// - Paths with no common directory give `""`.
///
/// # Examples
///
/// ```
/// use yamlfs::path::common_prefix;
///
/// assert_eq!(common_prefix(b'/', &["/a/b/c", "/a/b/d"]), "/a/b");
/// assert_eq!(common_prefix(b'/', &["/a/bc", "/a/bd"]), "/a");
/// assert_eq!(common_prefix(b'/', &["/x/./y/"]), "/x/y");
/// assert_eq!(common_prefix::<&str>(b'/', &[]), "");
/// ```
#[must_use]
pub fn common_prefix<S: AsRef<str>>(sep: u8, paths: &[S]) -> String {
    let (first, rest) = match paths {
        [] => return String::new(),
        [only] => return clean(only.as_ref(), sep),
        [first, rest @ ..] => (first, rest),
    };

    let candidate = with_trailing_separator(first.as_ref(), sep);
    let mut len = candidate.len();

    for path in rest {
        let other = with_trailing_separator(path.as_ref(), sep);
        len = shared_len(&candidate.as_bytes()[..len], other.as_bytes());
    }

    // Trim any partial segment after the last separator.
    match candidate.as_bytes()[..len].iter().rposition(|&b| b == sep) {
        Some(end) => candidate.get(..end).unwrap_or_default().to_string(),
        None => String::new(),
    }
}

/// [`common_prefix`] using the host's path separator.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)]
/// # {
/// use yamlfs::path::common_prefix_native;
///
/// assert_eq!(common_prefix_native(&["/srv/app/a.yaml", "/srv/app/b/c.yaml"]), "/srv/app");
/// # }
/// ```
#[must_use]
pub fn common_prefix_native<S: AsRef<str>>(paths: &[S]) -> String {
    let sep = u8::try_from(MAIN_SEPARATOR).unwrap_or(b'/');
    common_prefix(sep, paths)
}

fn with_trailing_separator(path: &str, sep: u8) -> String {
    let mut cleaned = clean(path, sep);
    cleaned.push(char::from(sep));
    cleaned
}

fn shared_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
