//! Validate command implementation.

use super::load_records;
use crate::error::{CliError, CliResult};
use datagrid_codec::Record;
use datagrid_core::{validate, RuleSet};
use std::path::Path;
use tracing::info;

/// A cell that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellFailure {
    /// 1-based row number in the input.
    pub row: usize,
    /// Field name.
    pub field: String,
    /// Validator message.
    pub message: String,
}

/// Checks every ruled field of every record.
#[must_use]
pub fn check_records(records: &[Record], rules: &RuleSet) -> Vec<CellFailure> {
    records
        .iter()
        .enumerate()
        .flat_map(|(index, record)| {
            rules.fields().filter_map(move |field| {
                let outcome = validate(field, record.value(field), rules);
                (!outcome.valid).then(|| CellFailure {
                    row: index + 1,
                    field: field.to_string(),
                    message: outcome.message.unwrap_or_default(),
                })
            })
        })
        .collect()
}

/// Runs the validate command.
pub fn run(input: &Path, rules_path: &Path) -> CliResult<()> {
    let records = load_records(input)?;
    let json = std::fs::read_to_string(rules_path).map_err(|e| CliError::io(rules_path, e))?;
    let rules = RuleSet::from_json(&json)?;

    let failures = check_records(&records, &rules);
    for failure in &failures {
        println!("row {}: {}", failure.row, failure.message);
    }
    info!(
        records = records.len(),
        rules = rules.len(),
        failures = failures.len(),
        "validation finished"
    );

    if failures.is_empty() {
        println!("{} record(s) valid", records.len());
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            failures: failures.len(),
        })
    }
}
