//! Exchange format identifiers.

use crate::error::{CodecError, CodecResult};
use std::fmt;
use std::str::FromStr;

/// A text representation records can be exported to or loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExchangeFormat {
    /// Comma-separated values, every field double-quoted.
    Delimited,
    /// Pretty-printed JSON array of objects.
    Structured,
}

impl ExchangeFormat {
    /// File extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Delimited => "csv",
            Self::Structured => "json",
        }
    }

    /// MIME type a download collaborator should advertise.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Delimited => "text/csv",
            Self::Structured => "application/json",
        }
    }

    /// Resolves a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> CodecResult<Self> {
        ext.parse()
    }
}

impl FromStr for ExchangeFormat {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" | "delimited" => Ok(Self::Delimited),
            "json" | "structured" => Ok(Self::Structured),
            _ => Err(CodecError::unsupported_format(s)),
        }
    }
}

impl fmt::Display for ExchangeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
