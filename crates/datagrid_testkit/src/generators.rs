//! Property-based test generators using proptest.
//!
//! Provides strategies for cell values, records and command sequences,
//! plus the property tests that run the engine against them.

use crate::harness::GridCommand;
use datagrid_codec::Record;
use proptest::prelude::*;

/// Strategy for printable ASCII cell values, possibly empty.
pub fn cell_value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,12}").expect("Invalid regex")
}

/// Strategy for cell values that may span lines.
pub fn multiline_value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~\n]{0,8}").expect("Invalid regex")
}

/// Strategy for sort keys drawn from a totally ordered domain.
///
/// Keys are either `$`-prefixed numbers or capitalized words. Numbers
/// compare numerically, words lexically, and every number sorts before
/// every word.
pub fn sort_key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("\\$[0-9]{1,3}(,[0-9]{3})?").expect("Invalid regex"),
        prop::string::string_regex("[A-Z][a-z]{0,5}").expect("Invalid regex"),
    ]
}

/// Strategy for a record holding a value for each of `fields`.
pub fn record_strategy(fields: &'static [&'static str]) -> impl Strategy<Value = Record> {
    prop::collection::vec(cell_value_strategy(), fields.len()).prop_map(move |values| {
        fields
            .iter()
            .zip(values)
            .map(|(field, value)| ((*field).to_string(), value))
            .collect()
    })
}

/// Strategy for a list of records over `fields`.
pub fn records_strategy(
    fields: &'static [&'static str],
    max_len: usize,
) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(fields), 0..max_len)
}

/// Strategy for generating grid commands.
pub fn grid_command_strategy() -> impl Strategy<Value = GridCommand> {
    prop_oneof![
        2 => prop::string::string_regex("[a-z0-9 ]{0,4}")
            .expect("Invalid regex")
            .prop_map(GridCommand::Search),
        2 => (0usize..8).prop_map(GridCommand::Sort),
        2 => (0usize..6).prop_map(GridCommand::GoToPage),
        1 => (0usize..8).prop_map(GridCommand::SetPageSize),
        2 => Just(GridCommand::AddRow),
        2 => any::<usize>().prop_map(GridCommand::DeleteRow),
        1 => Just(GridCommand::DeleteSelected),
        3 => (any::<usize>(), any::<bool>()).prop_map(|(i, on)| GridCommand::ToggleSelect(i, on)),
        1 => any::<bool>().prop_map(GridCommand::SelectAll),
        3 => (any::<usize>(), 0usize..8).prop_map(|(i, c)| GridCommand::BeginEdit(i, c)),
        1 => cell_value_strategy().prop_map(GridCommand::UpdateDraft),
        2 => cell_value_strategy().prop_map(GridCommand::CommitEdit),
        1 => Just(GridCommand::CancelEdit),
        1 => Just(GridCommand::Refresh),
    ]
}

/// Strategy for generating a sequence of commands.
pub fn command_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<GridCommand>> {
    prop::collection::vec(grid_command_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
