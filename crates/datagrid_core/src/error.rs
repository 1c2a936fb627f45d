//! Error types for the grid engine.

use crate::types::RecordId;
use datagrid_codec::CodecError;
use thiserror::Error;

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur in grid operations.
///
/// Page navigation outside the valid range is not an error: it is a
/// no-op reported through a `false` return value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The operation referenced a record that is not in the store.
    #[error("record not found: {record_id}")]
    NotFound {
        /// The identity that was not found.
        record_id: RecordId,
    },

    /// A field value was rejected by its validation rule.
    #[error("validation failed for {field}: {message}")]
    ValidationFailed {
        /// The field being validated.
        field: String,
        /// Diagnostic message for the user.
        message: String,
    },

    /// The field is not one of the configured columns.
    #[error("unknown field: {field}")]
    UnknownField {
        /// The field name.
        field: String,
    },

    /// The column does not accept edits.
    #[error("field is not editable: {field}")]
    NotEditable {
        /// The field name.
        field: String,
    },

    /// A commit or draft update was issued with no open edit session.
    #[error("no edit in progress")]
    NoActiveEdit,

    /// The command belongs to a feature switched off in the configuration.
    #[error("feature disabled: {feature}")]
    FeatureDisabled {
        /// Name of the disabled feature.
        feature: &'static str,
    },

    /// The grid configuration is inconsistent.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },

    /// A validation rule could not be compiled.
    #[error("invalid rule for {field}: {message}")]
    InvalidRule {
        /// The field the rule belongs to.
        field: String,
        /// Description of the problem.
        message: String,
    },

    /// Export or import encoding error.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

impl GridError {
    /// Creates a not found error.
    pub fn not_found(record_id: RecordId) -> Self {
        Self::NotFound { record_id }
    }

    /// Creates a validation failed error.
    pub fn validation_failed(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an unknown field error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Creates a not editable error.
    pub fn not_editable(field: impl Into<String>) -> Self {
        Self::NotEditable {
            field: field.into(),
        }
    }

    /// Creates a feature disabled error.
    pub fn feature_disabled(feature: &'static str) -> Self {
        Self::FeatureDisabled { feature }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates an invalid rule error.
    pub fn invalid_rule(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRule {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true for a validation rejection.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationFailed { .. })
    }

    /// Returns true when the target record was missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = GridError::validation_failed("name", "name is required");
        assert_eq!(err.to_string(), "validation failed for name: name is required");
        assert!(err.is_validation());

        let err = GridError::not_found(RecordId::new(7));
        assert_eq!(err.to_string(), "record not found: rec:7");
        assert!(err.is_not_found());
    }

    #[test]
    fn codec_errors_convert() {
        let err: GridError = CodecError::InvalidUtf8.into();
        assert!(matches!(err, GridError::Codec(CodecError::InvalidUtf8)));
    }
}
