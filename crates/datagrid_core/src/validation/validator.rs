//! Field validation.

use super::rules::{RuleSet, ValidationRule};
use crate::error::{GridError, GridResult};
use serde::Serialize;

/// Result of validating one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// Whether the value passed.
    pub valid: bool,
    /// Diagnostic for a rejected value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationOutcome {
    /// A passing outcome.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failing outcome with `message`.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Converts to a result, attributing failures to `field`.
    pub fn into_result(self, field: &str) -> GridResult<()> {
        if self.valid {
            Ok(())
        } else {
            Err(GridError::validation_failed(
                field,
                self.message.unwrap_or_default(),
            ))
        }
    }
}

impl ValidationRule {
    /// Checks `value` against this rule.
    ///
    /// Checks run in order and stop at the first failure: required,
    /// then (for non-blank values only) minimum length, maximum length
    /// and pattern.
    #[must_use]
    pub fn check(&self, field: &str, value: &str) -> ValidationOutcome {
        let blank = value.trim().is_empty();
        if blank {
            return if self.required {
                ValidationOutcome::invalid(format!("{field} is required"))
            } else {
                ValidationOutcome::valid()
            };
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return ValidationOutcome::invalid(format!(
                    "{field} must be at least {min} characters"
                ));
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                return ValidationOutcome::invalid(format!(
                    "{field} must be no more than {max} characters"
                ));
            }
        }
        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                return ValidationOutcome::invalid(
                    self.message
                        .clone()
                        .unwrap_or_else(|| format!("{field} format is invalid")),
                );
            }
        }
        ValidationOutcome::valid()
    }
}

/// Validates `value` for `field`. Fields without a rule always pass.
#[must_use]
pub fn validate(field: &str, value: &str, rules: &RuleSet) -> ValidationOutcome {
    rules
        .get(field)
        .map_or_else(ValidationOutcome::valid, |rule| rule.check(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn rules() -> RuleSet {
        RuleSet::new()
            .with(
                "name",
                ValidationRule::new().required().min_length(2).max_length(5),
            )
            .with(
                "extension",
                ValidationRule::new()
                    .pattern(Regex::new(r"^\d{4}$").unwrap())
                    .message("Extension must be 4 digits"),
            )
            .with(
                "office",
                ValidationRule::new().pattern(Regex::new("^[A-Z]").unwrap()),
            )
    }

    fn message(field: &str, value: &str) -> Option<String> {
        validate(field, value, &rules()).message
    }

    #[test]
    fn required_blank() {
        assert_eq!(message("name", "").as_deref(), Some("name is required"));
        assert_eq!(message("name", "   ").as_deref(), Some("name is required"));
    }

    #[test]
    fn blank_optional_skips_rest() {
        assert!(validate("extension", "", &rules()).valid);
        assert!(validate("extension", "  ", &rules()).valid);
    }

    #[test]
    fn length_bounds() {
        assert_eq!(
            message("name", "A").as_deref(),
            Some("name must be at least 2 characters")
        );
        assert_eq!(
            message("name", "Abcdef").as_deref(),
            Some("name must be no more than 5 characters")
        );
        assert!(validate("name", "Zoë", &rules()).valid);
    }

    #[test]
    fn pattern_messages() {
        assert_eq!(
            message("extension", "12a4").as_deref(),
            Some("Extension must be 4 digits")
        );
        assert_eq!(
            message("office", "tokyo").as_deref(),
            Some("office format is invalid")
        );
        assert!(validate("extension", "5407", &rules()).valid);
    }

    #[test]
    fn unruled_field_passes() {
        assert_eq!(validate("salary", "", &rules()), ValidationOutcome::valid());
    }

    #[test]
    fn into_result_carries_field() {
        let err = validate("name", "", &rules()).into_result("name").unwrap_err();
        assert_eq!(err, GridError::validation_failed("name", "name is required"));
        assert!(ValidationOutcome::valid().into_result("name").is_ok());
    }
}
