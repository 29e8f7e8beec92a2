//! YAML syntax checking.
//!
//! Reads a file as UTF-8 and parses it into a `serde_yaml::Value`. Parser
//! messages are kept verbatim so the report points at the same place the
//! parser does.

use crate::error::CheckError;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Read and parse `path`, returning the document tree.
///
/// Read failures, invalid UTF-8, and parser errors (including duplicate
/// keys and multi-document streams) each map to their own `CheckError`.
pub fn check_syntax(path: &Path) -> Result<Value, CheckError> {
    let display = path.to_string_lossy().to_string();
    let bytes = fs::read(path).map_err(|source| CheckError::Read {
        path: display.clone(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| CheckError::Encoding {
        path: display.clone(),
        source,
    })?;
    parse_str(&display, &text)
}

/// Parse already-decoded text. `path` is only used for messages.
pub fn parse_str(path: &str, text: &str) -> Result<Value, CheckError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str::<Value>(text).map_err(|err| {
        let loc = err.location();
        CheckError::Syntax {
            path: path.to_string(),
            message: err.to_string(),
            line: loc.as_ref().map(|l| l.line()),
            column: loc.as_ref().map(|l| l.column()),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_yaml_parses() {
        let doc = parse_str("ok.yml", "name: demo\nitems:\n  - 1\n  - two\n").unwrap();
        assert_eq!(doc["name"].as_str(), Some("demo"));
        assert_eq!(doc["items"].as_sequence().map(|s| s.len()), Some(2));
    }

    #[test]
    fn test_anchors_and_aliases_resolve() {
        let doc = parse_str("a.yml", "base: &b\n  x: 1\nother: *b\n").unwrap();
        assert_eq!(doc["other"]["x"].as_i64(), Some(1));
    }

    #[test]
    fn test_whitespace_only_is_null_document() {
        assert_eq!(parse_str("e.yml", "\n  \n").unwrap(), Value::Null);
    }

    #[test]
    fn test_unclosed_flow_sequence_fails_with_location() {
        let err = parse_str("bad.yml", "key: [1, 2\nother: 3\n").unwrap_err();
        assert!(err.location().is_some());
        match err {
            CheckError::Syntax { path, .. } => assert_eq!(path, "bad.yml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_keys_fail() {
        let err = parse_str("dup.yml", "a: 1\na: 2\n").unwrap_err();
        assert_eq!(err.code(), "SYNTAX_ERROR");
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("latin1.yml");
        fs::write(&p, b"name: caf\xe9\n").unwrap();
        let err = check_syntax(&p).unwrap_err();
        assert_eq!(err.code(), "ENCODING_ERROR");
        assert!(err.to_string().starts_with("Encoding error in "));
    }

    #[test]
    fn test_unreadable_path_is_read_error() {
        let dir = tempdir().unwrap();
        // A directory exists but cannot be read as a file
        let err = check_syntax(dir.path()).unwrap_err();
        assert_eq!(err.code(), "READ_ERROR");
    }

    #[test]
    fn test_file_on_disk_parses() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("ok.yaml");
        fs::write(&p, "a: 1\n").unwrap();
        let doc = check_syntax(&p).unwrap();
        assert_eq!(doc["a"].as_i64(), Some(1));
    }
}
