//! Per-field value validation.
//!
//! Validation is pure: [`validate`] looks at a field name, a candidate
//! value and a [`RuleSet`], and never touches grid state.

mod rules;
mod validator;

pub use rules::{RuleSet, RuleSpec, ValidationRule};
pub use validator::{validate, ValidationOutcome};
