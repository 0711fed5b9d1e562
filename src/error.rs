//! Error types for corpus loading and query construction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a corpus file.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The corpus path does not exist.
    #[error("corpus not found: {path:?}")]
    NotFound { path: PathBuf },

    /// The corpus exists but could not be opened or mapped.
    #[error("cannot read corpus {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line is not valid UTF-8.
    #[error("corpus {path:?} is not valid UTF-8 (line {line}, content looks like {detected})")]
    Decode {
        path: PathBuf,
        line: usize,
        detected: &'static str,
    },
}

/// Errors raised while building a filter.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The regular expression failed to compile.
    #[error("invalid regex pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type alias for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;
