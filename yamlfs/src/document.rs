//! Reading YAML documents from input streams.

use std::io::Read;

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::stream::InputStream;

/// Parse every `---`-separated YAML document in `reader`.
///
/// `name` identifies the reader in error messages.
///
/// # Errors
///
/// Returns [`Error::Yaml`] if any document fails to parse. Read failures
/// surface through the parser and are reported the same way.
///
/// # Examples
///
/// ```
/// use yamlfs::document::read_documents;
///
/// let docs = read_documents("a: 1\n---\nb: 2\n".as_bytes(), "inline").unwrap();
/// assert_eq!(docs.len(), 2);
/// ```
pub fn read_documents<R: Read>(reader: R, name: &str) -> Result<Vec<Value>> {
    serde_yaml::Deserializer::from_reader(reader)
        .map(|document| {
            Value::deserialize(document).map_err(|source| Error::Yaml {
                name: name.to_string(),
                source,
            })
        })
        .collect()
}

/// Parse every YAML document in an opened stream.
///
/// The stream is drained but not released; pass it to
/// [`close_file`](crate::stream::close_file) afterwards.
///
/// # Errors
///
/// Returns [`Error::Yaml`] naming the stream if parsing fails.
pub fn load_documents(stream: &mut InputStream) -> Result<Vec<Value>> {
    let name = stream.name();
    read_documents(stream, &name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{close_file, open_stream};

    #[test]
    fn test_single_document() {
        let docs = read_documents("name: demo\nreplicas: 3\n".as_bytes(), "inline").unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["name"], Value::from("demo"));
        assert_eq!(docs[0]["replicas"], Value::from(3));
    }

    #[test]
    fn test_multiple_documents() {
        let input = "---\nkind: A\n---\nkind: B\n---\nkind: C\n";
        let docs = read_documents(input.as_bytes(), "inline").unwrap();
        let kinds: Vec<_> = docs.iter().map(|d| d["kind"].as_str().unwrap()).collect();
        assert_eq!(kinds, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_invalid_document_names_source() {
        let err = read_documents("key: [unclosed\n".as_bytes(), "broken.yaml").unwrap_err();
        assert!(matches!(err, Error::Yaml { .. }));
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[test]
    fn test_load_documents_from_file_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.yml");
        std::fs::write(&path, "- one\n- two\n").unwrap();

        let mut stream = open_stream(path.to_str().unwrap()).unwrap();
        let docs = load_documents(&mut stream).unwrap();
        close_file(stream);

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].as_sequence().map(Vec::len), Some(2));
    }

    #[test]
    fn test_load_documents_error_uses_stream_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "a: b: c\n").unwrap();

        let mut stream = open_stream(path.to_str().unwrap()).unwrap();
        let err = load_documents(&mut stream).unwrap_err();
        close_file(stream);

        assert!(err.to_string().contains("bad.yaml"));
    }
}
