//! CLI error types.

use datagrid_codec::CodecError;
use datagrid_core::GridError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Errors reported by the `datagrid` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("{path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The input extension is neither `.csv` nor `.json`.
    #[error("cannot infer format of {path}: expected .csv or .json")]
    UnknownInputFormat {
        /// Input file.
        path: PathBuf,
    },

    /// Decoding the input failed.
    #[error("{path}: {source}")]
    Decode {
        /// Input file.
        path: PathBuf,
        /// Underlying error.
        source: CodecError,
    },

    /// An engine command failed.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Some cells failed validation.
    #[error("{failures} cell(s) failed validation")]
    ValidationFailed {
        /// Number of failing cells.
        failures: usize,
    },

    /// Writing JSON output failed.
    #[error("json output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Wraps an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
