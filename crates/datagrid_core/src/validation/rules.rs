//! Validation rules and rule sets.

use crate::error::{GridError, GridResult};
use datagrid_codec::CodecError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Constraints on the values of one field.
///
/// Every part is optional. Lengths count characters, not bytes. The
/// pattern matches anywhere in the value unless it is anchored.
#[derive(Debug, Clone, Default)]
pub struct ValidationRule {
    /// Reject empty and whitespace-only values.
    pub required: bool,
    /// Minimum length in characters.
    pub min_length: Option<usize>,
    /// Maximum length in characters.
    pub max_length: Option<usize>,
    /// Pattern the value must match.
    pub pattern: Option<Regex>,
    /// Message reported on a pattern mismatch.
    pub message: Option<String>,
}

impl ValidationRule {
    /// Creates a rule that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the minimum length.
    #[must_use]
    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    /// Sets the maximum length.
    #[must_use]
    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    /// Sets the pattern.
    #[must_use]
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Sets the pattern mismatch message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Serializable form of a [`ValidationRule`].
///
/// ```json
/// { "required": true, "minLength": 2, "pattern": "^\\d{4}$", "message": "Extension must be 4 digits" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RuleSpec {
    /// See [`ValidationRule::required`].
    pub required: bool,
    /// See [`ValidationRule::min_length`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// See [`ValidationRule::max_length`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Regular expression source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// See [`ValidationRule::message`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RuleSpec {
    /// Compiles the spec for `field`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRule` if the pattern does not compile or the
    /// length bounds are crossed.
    pub fn compile(&self, field: &str) -> GridResult<ValidationRule> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(GridError::invalid_rule(
                    field,
                    format!("minLength {min} exceeds maxLength {max}"),
                ));
            }
        }
        let pattern = self
            .pattern
            .as_deref()
            .map(Regex::new)
            .transpose()
            .map_err(|e| GridError::invalid_rule(field, e.to_string()))?;
        Ok(ValidationRule {
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            pattern,
            message: self.message.clone(),
        })
    }
}

impl From<&ValidationRule> for RuleSpec {
    fn from(rule: &ValidationRule) -> Self {
        Self {
            required: rule.required,
            min_length: rule.min_length,
            max_length: rule.max_length,
            pattern: rule.pattern.as_ref().map(|p| p.as_str().to_string()),
            message: rule.message.clone(),
        }
    }
}

/// Validation rules keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: BTreeMap<String, ValidationRule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule, builder style.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, rule: ValidationRule) -> Self {
        self.insert(field, rule);
        self
    }

    /// Adds or replaces the rule for `field`.
    pub fn insert(&mut self, field: impl Into<String>, rule: ValidationRule) -> Option<ValidationRule> {
        self.rules.insert(field.into(), rule)
    }

    /// Returns the rule for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&ValidationRule> {
        self.rules.get(field)
    }

    /// Removes the rule for `field`.
    pub fn remove(&mut self, field: &str) -> Option<ValidationRule> {
        self.rules.remove(field)
    }

    /// Fields that carry a rule, in name order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Number of fields with a rule.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no field has a rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Compiles a map of specs.
    pub fn from_specs<K: Into<String>>(specs: impl IntoIterator<Item = (K, RuleSpec)>) -> GridResult<Self> {
        let mut set = Self::new();
        for (field, spec) in specs {
            let field = field.into();
            let rule = spec.compile(&field)?;
            set.insert(field, rule);
        }
        Ok(set)
    }

    /// Loads rules from a JSON object of field → [`RuleSpec`].
    ///
    /// # Errors
    ///
    /// Returns `Codec` for malformed JSON and `InvalidRule` for specs
    /// that do not compile.
    pub fn from_json(json: &str) -> GridResult<Self> {
        let specs: BTreeMap<String, RuleSpec> =
            serde_json::from_str(json).map_err(CodecError::from)?;
        Self::from_specs(specs)
    }

    /// Returns the serializable form of every rule.
    #[must_use]
    pub fn to_specs(&self) -> BTreeMap<String, RuleSpec> {
        self.rules
            .iter()
            .map(|(field, rule)| (field.clone(), RuleSpec::from(rule)))
            .collect()
    }
}
