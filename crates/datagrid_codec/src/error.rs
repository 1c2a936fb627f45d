//! Error types for the codec crate.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during encoding or decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Failed to encode records.
    #[error("encoding failed: {message}")]
    EncodingFailed {
        /// Description of the encoding error.
        message: String,
    },

    /// Failed to decode input text.
    #[error("decoding failed: {message}")]
    DecodingFailed {
        /// Description of the decoding error.
        message: String,
    },

    /// Encoded output was not valid UTF-8.
    #[error("invalid UTF-8 string")]
    InvalidUtf8,

    /// A delimited row has a different number of fields than the header.
    #[error("row {row} has {actual} fields, header has {expected}")]
    RowLength {
        /// 1-based data row number (header excluded).
        row: usize,
        /// Number of header fields.
        expected: usize,
        /// Number of fields found in the row.
        actual: usize,
    },

    /// Structured input had an unexpected shape.
    #[error("invalid structure: {message}")]
    InvalidStructure {
        /// Description of the structural error.
        message: String,
    },

    /// Unknown exchange format name or file extension.
    #[error("unsupported format: {name}")]
    UnsupportedFormat {
        /// The name that was not recognised.
        name: String,
    },
}

impl CodecError {
    /// Create an encoding failed error.
    pub fn encoding_failed(message: impl Into<String>) -> Self {
        Self::EncodingFailed {
            message: message.into(),
        }
    }

    /// Create a decoding failed error.
    pub fn decoding_failed(message: impl Into<String>) -> Self {
        Self::DecodingFailed {
            message: message.into(),
        }
    }

    /// Create an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(name: impl Into<String>) -> Self {
        Self::UnsupportedFormat { name: name.into() }
    }
}

impl From<csv::Error> for CodecError {
    fn from(err: csv::Error) -> Self {
        if let csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } = err.kind()
        {
            let row = pos.as_ref().map_or(0, |p| p.record() as usize);
            return Self::RowLength {
                row,
                expected: *expected_len as usize,
                actual: *len as usize,
            };
        }
        Self::decoding_failed(err.to_string())
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            Self::invalid_structure(err.to_string())
        } else {
            Self::decoding_failed(err.to_string())
        }
    }
}
