//! Properties file parsing.
//!
//! Agent parameters are commonly kept in a `buildAgent.properties`-style
//! file. This parser handles the subset those files use in practice:
//!
//! - `key=value` and `key: value` pairs (first separator wins)
//! - `#` and `!` comment lines
//! - blank lines
//!
//! Line continuations and unicode escapes are not supported.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading a properties file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-comment line had no key.
    #[error("Line {line_number}: missing key in '{line}'")]
    MissingKey { line_number: usize, line: String },

    /// A non-comment line had no `=` or `:` separator.
    #[error("Line {line_number}: expected 'key=value', got '{line}'")]
    MissingSeparator { line_number: usize, line: String },
}

/// Parse properties text into ordered key/value pairs.
///
/// Later duplicates are kept; callers inserting into a map get
/// last-one-wins semantics.
pub fn parse_properties(contents: &str) -> Result<Vec<(String, String)>, ConfigFileError> {
    let mut pairs = Vec::new();

    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let Some(split_at) = line.find(['=', ':']) else {
            return Err(ConfigFileError::MissingSeparator {
                line_number: index + 1,
                line: line.to_string(),
            });
        };

        let key = line[..split_at].trim();
        if key.is_empty() {
            return Err(ConfigFileError::MissingKey {
                line_number: index + 1,
                line: line.to_string(),
            });
        }

        let value = line[split_at + 1..].trim();
        pairs.push((key.to_string(), value.to_string()));
    }

    Ok(pairs)
}

/// Read and parse a properties file.
pub fn load_properties_file(path: &Path) -> Result<Vec<(String, String)>, ConfigFileError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let pairs = parse_properties(&contents)?;
    debug!(path = %path.display(), count = pairs.len(), "Loaded properties file");
    Ok(pairs)
}
