//! Layered error types
//!
//! Detection itself is total: any text tokenizes and any dictionary scores.
//! Errors only arise at the edges, when dictionaries are loaded or a
//! configuration is built.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or parsing frequency tables
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// I/O error with the path that failed
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// File or directory being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed `word frequency` record
    #[error("parse error in {path} at line {line}: {reason}")]
    Parse {
        /// Source of the record (`<inline>` for in-memory input)
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// What was wrong with the record
        reason: String,
    },

    /// Directory contained no usable frequency tables
    #[error("no frequency tables found in {path}")]
    Empty {
        /// Directory that was scanned
        path: PathBuf,
    },
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Accepted fuzzy distances would contribute nothing
    #[error("max fuzzy distance ({max_distance}) must be lower than the fuzzy ceiling ({ceiling})")]
    DistanceOutOfRange {
        /// Configured maximum distance
        max_distance: usize,
        /// Configured fuzzy ceiling
        ceiling: u64,
    },

    /// TOML could not be deserialized
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for dictionary operations
pub type Result<T> = std::result::Result<T, DictionaryError>;
