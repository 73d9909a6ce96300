//! Rewrites the config file, preserving the leading comment header.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

/// Failure to rewrite the config file. Unlike load problems, this
/// propagates to the caller so a failed write never looks like success.
#[derive(Debug, thiserror::Error)]
#[error("could not write {path}: {source}")]
pub struct WriteError {
    pub path: PathBuf,
    pub source: io::Error,
}

/// Maximal run of leading comment-only lines (first non-whitespace content
/// is `//`), each newline-terminated. The generating tool writes a warning
/// comment at the top of the file; it is not representable in the parsed
/// document and would be lost on rewrite without this.
pub fn leading_comment_header(raw: &str) -> &str {
    let mut end = 0;
    for line in raw.split_inclusive('\n') {
        if line.ends_with('\n') && line.trim_start().starts_with("//") {
            end += line.len();
        } else {
            break;
        }
    }
    &raw[..end]
}

/// Write `header` followed by the document at 4-space indentation and a
/// trailing newline, in a single write to `path`.
pub fn write(path: &Path, header: &str, doc: &Value) -> Result<(), WriteError> {
    let wrap = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };

    let mut buf = Vec::from(header.as_bytes());
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)
        .map_err(|e| wrap(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    buf.push(b'\n');

    fs::write(path, buf).map_err(wrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn header_is_the_leading_comment_run() {
        let raw = "// line one\n// line two\n{\n}\n";
        assert_eq!(leading_comment_header(raw), "// line one\n// line two\n");
    }

    #[test]
    fn header_allows_leading_whitespace_on_comment_lines() {
        let raw = "  // indented\n{\"a\": 1}\n";
        assert_eq!(leading_comment_header(raw), "  // indented\n");
    }

    #[test]
    fn header_is_empty_without_leading_comments() {
        assert_eq!(leading_comment_header("{\"a\": 1}\n"), "");
        assert_eq!(leading_comment_header(""), "");
    }

    #[test]
    fn header_stops_at_first_non_comment_line() {
        let raw = "// keep\n{\n// not a header\n}\n";
        assert_eq!(leading_comment_header(raw), "// keep\n");
    }

    #[test]
    fn write_emits_header_then_indented_json_then_newline() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("props.json");
        let doc = json!({ "configurations": [{ "includePath": ["${workspaceFolder}"] }] });

        write(&path, "// warning\n", &doc).expect("write");

        let out = fs::read_to_string(&path).expect("read back");
        assert!(out.starts_with("// warning\n{\n"));
        assert!(out.contains("\n    \"configurations\": [\n"));
        assert!(out.contains("\n        {\n"));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn write_failure_carries_the_target_path() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("no-such-dir").join("props.json");

        let err = write(&path, "", &json!({})).expect_err("expected failure");
        assert_eq!(err.path, path);
    }
}
