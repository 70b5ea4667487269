//! Error types and handling for the notebook stripper

use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Custom result type for notebook stripping operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for notebook stripping operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Failed to read file {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to convert data to JSON: {0}")]
    ParseFailure(#[from] ParseError),

    #[error("Failed to convert JSON to string: {0}")]
    SerializeFailure(#[source] serde_json::Error),

    #[error("Failed to write to file {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl Error {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::ReadFailure {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::WriteFailure {
            path: path.into(),
            source,
        }
    }

    /// Write failures end the whole batch, everything else only skips the file.
    pub fn aborts_batch(&self) -> bool {
        matches!(self, Error::WriteFailure { .. })
    }
}

// -------------------- Sub-Error Categories --------------------

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseError {
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("input is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("top-level value must be an object, found {0}")]
    NotAnObject(&'static str),
}
