//! Config file loading: read, strip comments, parse.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde_json::Value;

/// Error reading or parsing the config file. Either way nothing is written.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Result of locating the config file.
#[derive(Debug)]
pub enum LoadOutcome {
    /// No config file at the expected location; nothing to do.
    Absent,
    /// File read and parsed. `raw` keeps the original text so the leading
    /// comment header can be recovered at write time.
    Loaded { raw: String, doc: Value },
}

/// Read and parse the config at `path`, tolerating `//` comments.
pub fn load(path: &Path) -> Result<LoadOutcome, LoadError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(LoadOutcome::Absent),
        Err(e) => {
            return Err(LoadError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    let doc = serde_json::from_str(&strip_comments(&raw)).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(LoadOutcome::Loaded { raw, doc })
}

/// Strip single-line `//` comment spans so serde_json accepts the file.
/// Pure text transform, applied strictly before parsing.
fn strip_comments(raw: &str) -> String {
    let comment = Regex::new(r"//[^\n]*").expect("comment pattern is valid");
    comment.replace_all(raw, "").into_owned()
}
