//! Command-sequence harness.
//!
//! Drives a [`Grid`] with [`GridCommand`]s and checks the engine's
//! invariants after every step.

use datagrid_core::{Grid, GridError, RecordId};
use std::collections::HashSet;

/// A user intent, with record and column references given as indexes
/// that are resolved against the grid when the command is applied.
#[derive(Debug, Clone)]
pub enum GridCommand {
    /// Set the search text.
    Search(String),
    /// Click the header of the column at this index.
    Sort(usize),
    /// Go to a page (may be out of range).
    GoToPage(usize),
    /// Change the page size (may be zero).
    SetPageSize(usize),
    /// Add a row.
    AddRow,
    /// Delete the record at this store index.
    DeleteRow(usize),
    /// Delete the selection.
    DeleteSelected,
    /// Select or unselect the record at this store index.
    ToggleSelect(usize, bool),
    /// Select or unselect everything.
    SelectAll(bool),
    /// Edit a cell: store index, column index.
    BeginEdit(usize, usize),
    /// Update the draft of the open edit.
    UpdateDraft(String),
    /// Commit the open edit.
    CommitEdit(String),
    /// Cancel the open edit.
    CancelEdit,
    /// Recompute the view.
    Refresh,
}

/// Drives a grid and verifies invariants.
pub struct GridHarness {
    /// The grid under test.
    pub grid: Grid,
    applied: usize,
}

impl GridHarness {
    /// Wraps `grid` and checks its initial state.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let harness = Self { grid, applied: 0 };
        harness.check_invariants();
        harness
    }

    /// Number of commands applied so far.
    #[must_use]
    pub fn applied(&self) -> usize {
        self.applied
    }

    fn store_id(&self, index: usize) -> Option<RecordId> {
        let ids = self.grid.record_ids();
        if ids.is_empty() {
            None
        } else {
            Some(ids[index % ids.len()])
        }
    }

    fn column_field(&self, index: usize) -> Option<String> {
        let columns = self.grid.columns();
        if columns.is_empty() {
            None
        } else {
            Some(columns[index % columns.len()].field.clone())
        }
    }

    /// Applies one command, then checks invariants.
    ///
    /// Returns the command's error, if any. Errors are expected results
    /// (validation failures, disabled features), not harness failures.
    pub fn apply(&mut self, command: &GridCommand) -> Option<GridError> {
        let result: Result<(), GridError> = match command {
            GridCommand::Search(text) => self.grid.search(text.as_str()),
            GridCommand::Sort(col) => match self.column_field(*col) {
                Some(field) => self.grid.sort(&field).map(|_| ()),
                None => Ok(()),
            },
            GridCommand::GoToPage(page) => {
                self.grid.go_to_page(*page);
                Ok(())
            }
            GridCommand::SetPageSize(size) => {
                self.grid.set_page_size(*size);
                Ok(())
            }
            GridCommand::AddRow => self.grid.add_row().map(|_| ()),
            GridCommand::DeleteRow(index) => match self.store_id(*index) {
                Some(id) => self.grid.delete_row(id),
                None => Ok(()),
            },
            GridCommand::DeleteSelected => self.grid.delete_selected().map(|_| ()),
            GridCommand::ToggleSelect(index, on) => match self.store_id(*index) {
                Some(id) => self.grid.toggle_select(id, *on).map(|_| ()),
                None => Ok(()),
            },
            GridCommand::SelectAll(on) => self.grid.select_all(*on),
            GridCommand::BeginEdit(index, col) => {
                match (self.store_id(*index), self.column_field(*col)) {
                    (Some(id), Some(field)) => self.grid.begin_edit(id, &field).map(|_| ()),
                    _ => Ok(()),
                }
            }
            GridCommand::UpdateDraft(value) => self.grid.update_draft(value.as_str()),
            GridCommand::CommitEdit(value) => self.grid.commit_edit(value.as_str()).map(|_| ()),
            GridCommand::CancelEdit => {
                self.grid.cancel_edit();
                Ok(())
            }
            GridCommand::Refresh => {
                self.grid.refresh();
                Ok(())
            }
        };
        self.applied += 1;
        self.check_invariants();
        result.err()
    }

    /// Applies every command in order.
    pub fn apply_all(&mut self, commands: &[GridCommand]) {
        for command in commands {
            self.apply(command);
        }
    }

    /// Panics if any engine invariant is violated.
    pub fn check_invariants(&self) {
        let grid = &self.grid;
        let view = grid.view_ids();

        let unique: HashSet<RecordId> = view.iter().copied().collect();
        assert_eq!(unique.len(), view.len(), "view lists a record twice");
        assert!(
            view.iter().all(|id| grid.record(*id).is_some()),
            "view lists a record missing from the store"
        );
        assert!(view.len() <= grid.len());

        let pages = grid.page_count();
        assert!(pages >= 1, "page count below 1");
        assert!(
            (1..=pages).contains(&grid.current_page()),
            "page {} outside 1..={pages}",
            grid.current_page()
        );
        if !view.is_empty() {
            assert!(!grid.page_ids().is_empty(), "empty page with records in view");
        }

        assert_eq!(
            grid.selected_count(),
            grid.selected_records().len(),
            "selection holds identities missing from the store"
        );

        if let Some(edit) = grid.editing() {
            assert!(
                grid.record(edit.record_id).is_some(),
                "edit open on a deleted record"
            );
        }

        let snapshot = grid.snapshot();
        assert_eq!(snapshot.rows.len(), grid.page_ids().len());
        assert_eq!(snapshot.view_len, view.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{employee_grid, scenarios};

    #[test]
    fn harness_runs_mixed_commands() {
        let mut harness = GridHarness::new(employee_grid());
        harness.apply_all(&[
            GridCommand::SetPageSize(5),
            GridCommand::GoToPage(3),
            GridCommand::Search("tokyo".into()),
            GridCommand::SelectAll(true),
            GridCommand::DeleteSelected,
            GridCommand::AddRow,
            GridCommand::CommitEdit("Zoe Zed".into()),
            GridCommand::Sort(6),
            GridCommand::Sort(6),
        ]);
        assert_eq!(harness.applied(), 9);
        assert_eq!(harness.grid.len(), 1);
        assert_eq!(harness.grid.selected_count(), 0);
    }

    #[test]
    fn hidden_records_are_addressable() {
        let mut grid = scenarios::numbered_grid(4, 2);
        grid.search("row-3").unwrap();
        let mut harness = GridHarness::new(grid);
        assert_eq!(harness.grid.view_len(), 1);
        assert_eq!(harness.apply(&GridCommand::DeleteRow(0)), None);
        assert_eq!(harness.grid.len(), 3);
    }

    #[test]
    fn commit_without_edit_reports_error() {
        let mut harness = GridHarness::new(scenarios::salary_grid(10));
        let err = harness.apply(&GridCommand::CommitEdit("x".into()));
        assert_eq!(err, Some(GridError::NoActiveEdit));
    }
}
