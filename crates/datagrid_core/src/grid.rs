//! The grid engine facade.
//!
//! [`Grid`] owns the record store and the view state, accepts commands
//! and hands out [`GridSnapshot`]s. Every command that changes the store,
//! the search text or the sort recomputes the view and re-clamps the
//! current page before returning.

use crate::column::{self, ColumnDescriptor};
use crate::config::{DisplayIdConfig, GridConfig};
use crate::edit::{ActiveEdit, CommitOutcome, EditSession, PriorEditResolution};
use crate::error::{GridError, GridResult};
use crate::export;
use crate::record::{InsertPosition, RecordStore};
use crate::selection::SelectionSet;
use crate::snapshot::{CellSnapshot, ColumnSnapshot, GridSnapshot, RowSnapshot};
use crate::stats::{GridCounters, GridStats};
use crate::types::{RecordId, SortState};
use crate::validation::{validate, RuleSet, ValidationOutcome};
use crate::view::{PageRange, Pager, ViewPipeline};
use datagrid_codec::{ExchangeFormat, Record};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Number of page buttons the paging bar shows.
pub const PAGE_WINDOW: usize = 5;

/// Field consulted for the name shown in a deletion prompt.
const NAME_FIELD: &str = "name";

/// A row created by [`Grid::add_row`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedRow {
    /// Identity of the new record.
    pub id: RecordId,
    /// Display identifier assigned to it, if display ids are enabled.
    pub display_id: Option<String>,
    /// Field opened for editing, if any.
    pub editing: Option<String>,
}

/// What a deletion request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionTarget {
    /// One record.
    Row(RecordId),
    /// Every selected record.
    Selected,
}

/// A deletion awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionProposal {
    /// Records that would be removed, in store order.
    pub ids: Vec<RecordId>,
    /// Prompt text for the user.
    pub description: String,
}

#[derive(Debug, Clone, Copy)]
struct Features {
    sortable: bool,
    editable: bool,
    selectable: bool,
    pagination: bool,
    search: bool,
    export: bool,
}

impl Features {
    fn require(enabled: bool, feature: &'static str) -> GridResult<()> {
        if enabled {
            Ok(())
        } else {
            Err(GridError::feature_disabled(feature))
        }
    }
}

/// The grid state engine.
///
/// # Example
///
/// ```rust
/// use datagrid_core::{ColumnDescriptor, Grid, GridConfig};
/// use datagrid_codec::Record;
///
/// let mut grid = Grid::new(
///     GridConfig::new()
///         .columns(vec![ColumnDescriptor::new("name"), ColumnDescriptor::new("salary")])
///         .data(vec![
///             Record::new().with("name", "Alice").with("salary", "$50,000"),
///             Record::new().with("name", "Bob").with("salary", "$9,000"),
///         ]),
/// )?;
///
/// grid.sort("salary")?;
/// let names: Vec<_> = grid
///     .snapshot()
///     .rows
///     .iter()
///     .map(|row| row.value("name").unwrap_or_default().to_string())
///     .collect();
/// assert_eq!(names, ["Bob", "Alice"]);
/// # Ok::<(), datagrid_core::GridError>(())
/// ```
#[derive(Debug)]
pub struct Grid {
    columns: Vec<ColumnDescriptor>,
    store: RecordStore,
    pipeline: ViewPipeline,
    view: Vec<RecordId>,
    pager: Pager,
    selection: SelectionSet,
    edit: EditSession,
    rules: RuleSet,
    features: Features,
    page_size_options: Vec<usize>,
    display_id: Option<DisplayIdConfig>,
    counters: Arc<GridCounters>,
}

impl Grid {
    /// Builds a grid from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration is inconsistent.
    pub fn new(config: GridConfig) -> GridResult<Self> {
        config.validate()?;
        let GridConfig {
            columns,
            data,
            page_size,
            page_size_options,
            sortable,
            editable,
            selectable,
            pagination,
            search,
            export,
            validation,
            display_id,
        } = config;

        let mut grid = Self {
            columns,
            store: RecordStore::from_records(data),
            pipeline: ViewPipeline::new(),
            view: Vec::new(),
            pager: Pager::new(page_size),
            selection: SelectionSet::new(),
            edit: EditSession::new(),
            rules: validation,
            features: Features {
                sortable,
                editable,
                selectable,
                pagination,
                search,
                export,
            },
            page_size_options,
            display_id,
            counters: Arc::new(GridCounters::new()),
        };
        grid.recompute();
        debug!(
            records = grid.store.len(),
            columns = grid.columns.len(),
            "grid created"
        );
        Ok(grid)
    }

    fn recompute(&mut self) {
        self.view = self.pipeline.compute(&self.store, &self.columns);
        self.counters.record_recompute();
        self.pager.clamp(self.view.len());
    }

    fn column(&self, field: &str) -> GridResult<&ColumnDescriptor> {
        column::find(&self.columns, field).ok_or_else(|| GridError::unknown_field(field))
    }

    // === Queries ===

    /// Column descriptors in display order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// The validation rules.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns a record by identity.
    #[must_use]
    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.store.get(id)
    }

    /// Identities of every record, in store order.
    #[must_use]
    pub fn record_ids(&self) -> Vec<RecordId> {
        self.store.ids()
    }

    /// The full view sequence.
    #[must_use]
    pub fn view_ids(&self) -> &[RecordId] {
        &self.view
    }

    /// Number of records in the view.
    #[must_use]
    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// Identities on the current page.
    #[must_use]
    pub fn page_ids(&self) -> &[RecordId] {
        if self.features.pagination {
            self.pager.slice(&self.view)
        } else {
            &self.view
        }
    }

    /// Current page (1-based).
    #[must_use]
    pub fn current_page(&self) -> usize {
        if self.features.pagination {
            self.pager.current_page()
        } else {
            1
        }
    }

    /// Rows per page.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }

    /// Number of pages, at least 1.
    #[must_use]
    pub fn page_count(&self) -> usize {
        if self.features.pagination {
            self.pager.page_count(self.view.len())
        } else {
            1
        }
    }

    /// Page numbers for the paging bar.
    #[must_use]
    pub fn page_window(&self) -> Vec<usize> {
        if self.features.pagination {
            self.pager.page_window(self.view.len(), PAGE_WINDOW)
        } else {
            vec![1]
        }
    }

    /// Positions shown on the current page.
    #[must_use]
    pub fn page_range(&self) -> PageRange {
        if self.features.pagination {
            self.pager.page_range(self.view.len())
        } else {
            PageRange {
                start: usize::from(!self.view.is_empty()),
                end: self.view.len(),
                total: self.view.len(),
            }
        }
    }

    /// Current search text.
    #[must_use]
    pub fn search_query(&self) -> &str {
        self.pipeline.search_query()
    }

    /// Active sort.
    #[must_use]
    pub fn sort_state(&self) -> Option<&SortState> {
        self.pipeline.sort_state()
    }

    /// Number of selected records.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Checks whether a record is selected.
    #[must_use]
    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selection.contains(id)
    }

    /// Selected records in store order.
    #[must_use]
    pub fn selected_records(&self) -> Vec<Record> {
        self.selection.materialize(&self.store)
    }

    /// The open edit session.
    #[must_use]
    pub fn editing(&self) -> Option<&ActiveEdit> {
        self.edit.active()
    }

    /// All records in store order (`getData`).
    #[must_use]
    pub fn data(&self) -> Vec<Record> {
        self.store.records()
    }

    /// Records in view order.
    #[must_use]
    pub fn view_records(&self) -> Vec<Record> {
        self.view
            .iter()
            .filter_map(|id| self.store.get(*id).cloned())
            .collect()
    }

    /// Operation counters.
    #[must_use]
    pub fn stats(&self) -> GridStats {
        self.counters.snapshot()
    }

    /// Shared handle to the live counters.
    #[must_use]
    pub fn counters(&self) -> Arc<GridCounters> {
        Arc::clone(&self.counters)
    }

    /// Validates a value against the grid's rules without editing.
    #[must_use]
    pub fn validate(&self, field: &str, value: &str) -> ValidationOutcome {
        validate(field, value, &self.rules)
    }

    /// Builds the render snapshot.
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        let sort = self.pipeline.sort_state();
        let columns = self
            .columns
            .iter()
            .map(|col| ColumnSnapshot {
                field: col.field.clone(),
                title: col.header().to_string(),
                sortable: self.features.sortable && col.sortable,
                editable: self.features.editable && col.editable,
                width: col.width.clone(),
                sorted: sort.filter(|s| s.field == col.field).map(|s| s.direction),
            })
            .collect();

        let rows = self
            .page_ids()
            .iter()
            .filter_map(|id| self.store.get(*id).map(|record| (*id, record)))
            .map(|(id, record)| RowSnapshot {
                id,
                selected: self.selection.contains(id),
                cells: self
                    .columns
                    .iter()
                    .map(|col| {
                        let value = record.value(&col.field);
                        CellSnapshot {
                            field: col.field.clone(),
                            value: value.to_string(),
                            display: col.format(value),
                            editing: self.edit.is_editing(id, &col.field),
                        }
                    })
                    .collect(),
            })
            .collect();

        GridSnapshot {
            columns,
            rows,
            total_records: self.store.len(),
            view_len: self.view.len(),
            current_page: self.current_page(),
            page_size: self.pager.page_size(),
            page_count: self.page_count(),
            page_window: self.page_window(),
            range: self.page_range(),
            page_size_options: self.page_size_options.clone(),
            sort: sort.cloned(),
            search_query: self.pipeline.search_query().to_string(),
            selected_count: self.selection.len(),
            all_selected: !self.store.is_empty() && self.selection.len() == self.store.len(),
            editing: self.edit.active().cloned(),
        }
    }

    // === View commands ===

    /// Sets the search text and returns to page 1.
    pub fn search(&mut self, query: impl Into<String>) -> GridResult<()> {
        Features::require(self.features.search, "search")?;
        self.pipeline.set_search(query);
        self.pager.reset();
        self.recompute();
        Ok(())
    }

    /// Sorts by `field`, or flips the direction if already sorted by it.
    ///
    /// Returns `false` when the column is not sortable.
    ///
    /// # Errors
    ///
    /// `FeatureDisabled` when sorting is off, `UnknownField` when no
    /// column shows `field`.
    pub fn sort(&mut self, field: &str) -> GridResult<bool> {
        Features::require(self.features.sortable, "sortable")?;
        if !self.column(field)?.sortable {
            return Ok(false);
        }
        let state = self.pipeline.toggle_sort(field);
        debug!(field, direction = %state.direction, "sort changed");
        self.recompute();
        Ok(true)
    }

    /// Moves to page `page`. Out-of-range requests are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.features.pagination && self.pager.go_to_page(page, self.view.len())
    }

    /// Moves to the first page.
    pub fn first_page(&mut self) -> bool {
        self.features.pagination && self.pager.first_page(self.view.len())
    }

    /// Moves one page back.
    pub fn previous_page(&mut self) -> bool {
        self.features.pagination && self.pager.previous_page(self.view.len())
    }

    /// Moves one page forward.
    pub fn next_page(&mut self) -> bool {
        self.features.pagination && self.pager.next_page(self.view.len())
    }

    /// Moves to the last page.
    pub fn last_page(&mut self) -> bool {
        self.features.pagination && self.pager.last_page(self.view.len())
    }

    /// Changes the page size and returns to page 1. Zero is ignored.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        let changed = self.pager.set_page_size(page_size);
        if changed {
            debug!(page_size, "page size changed");
        }
        changed
    }

    /// Recomputes the view from the store.
    pub fn refresh(&mut self) {
        self.recompute();
    }

    // === Record commands ===

    /// Prepends a new row and opens it for editing.
    ///
    /// The row gets the next display identifier and each column's
    /// default value. The search is cleared so the row is visible, the
    /// pager returns to page 1 and the first editable column is opened
    /// for editing.
    pub fn add_row(&mut self) -> GridResult<AddedRow> {
        Features::require(self.features.editable, "editable")?;

        let mut record = Record::new();
        let display_id = self.display_id.as_ref().map(|cfg| {
            let value = cfg.format(self.store.max_embedded_number(&cfg.field) + 1);
            record.set(cfg.field.as_str(), value.clone());
            (cfg.field.clone(), value)
        });
        for col in &self.columns {
            if display_id.as_ref().is_some_and(|(field, _)| *field == col.field) {
                continue;
            }
            record.set(
                col.field.as_str(),
                col.default_value.clone().unwrap_or_default(),
            );
        }

        let id = self.store.insert(record, InsertPosition::Front);
        self.counters.record_insert();
        self.pipeline.set_search("");
        self.pager.reset();

        let editing = self
            .columns
            .iter()
            .find(|c| c.editable)
            .map(|c| c.field.clone());
        if let Some(field) = &editing {
            let prior = self.edit.begin(id, field, &mut self.store, &self.rules)?;
            self.note_prior(&prior);
        }
        self.recompute();

        debug!(%id, "row added");
        Ok(AddedRow {
            id,
            display_id: display_id.map(|(_, value)| value),
            editing,
        })
    }

    /// Removes one record, along with its selection and any edit on it.
    ///
    /// # Errors
    ///
    /// `NotFound` if the record is not in the store.
    pub fn delete_row(&mut self, id: RecordId) -> GridResult<()> {
        Features::require(self.features.editable, "editable")?;
        self.store.delete(id)?;
        self.forget(id);
        self.counters.record_deletes(1);
        self.recompute();
        Ok(())
    }

    /// Removes every selected record and returns how many went.
    pub fn delete_selected(&mut self) -> GridResult<usize> {
        Features::require(self.features.selectable, "selectable")?;
        let ids = self.selection.ids_in_store_order(&self.store);
        Ok(self.remove_all(&ids))
    }

    /// Describes what a deletion would remove, without removing it.
    ///
    /// # Errors
    ///
    /// `NotFound` for a row that is not in the store.
    pub fn propose_deletion(&self, target: DeletionTarget) -> GridResult<DeletionProposal> {
        match target {
            DeletionTarget::Row(id) => {
                Features::require(self.features.editable, "editable")?;
                let record = self.store.get(id).ok_or_else(|| GridError::not_found(id))?;
                let id_field = self
                    .display_id
                    .as_ref()
                    .map_or("id", |cfg| cfg.field.as_str());
                let label = [NAME_FIELD, id_field]
                    .into_iter()
                    .map(|field| record.value(field))
                    .find(|value| !value.is_empty())
                    .unwrap_or("this row");
                Ok(DeletionProposal {
                    ids: vec![id],
                    description: format!("Delete {label}?"),
                })
            }
            DeletionTarget::Selected => {
                Features::require(self.features.selectable, "selectable")?;
                let ids = self.selection.ids_in_store_order(&self.store);
                let description = format!("Delete {} selected row(s)?", ids.len());
                Ok(DeletionProposal { ids, description })
            }
        }
    }

    /// Carries out a proposed deletion and returns how many records went.
    ///
    /// Records that disappeared since the proposal are skipped.
    pub fn confirm_deletion(&mut self, proposal: &DeletionProposal) -> GridResult<usize> {
        Ok(self.remove_all(&proposal.ids))
    }

    fn remove_all(&mut self, ids: &[RecordId]) -> usize {
        let removed = self.store.bulk_delete(ids);
        for id in &removed {
            self.forget(*id);
        }
        self.counters.record_deletes(removed.len() as u64);
        self.recompute();
        debug!(requested = ids.len(), removed = removed.len(), "rows deleted");
        removed.len()
    }

    fn forget(&mut self, id: RecordId) {
        self.selection.remove(id);
        self.edit.on_record_deleted(id);
    }

    /// Replaces all records (`setData`).
    ///
    /// Selection and any open edit are dropped and the pager returns to
    /// page 1. Search and sort stay in effect.
    pub fn set_data(&mut self, records: Vec<Record>) {
        self.edit.discard();
        self.selection.clear();
        self.store.replace_all(records);
        self.pager.reset();
        self.recompute();
    }

    // === Selection commands ===

    /// Marks or unmarks one record. Returns true if membership changed.
    ///
    /// # Errors
    ///
    /// `NotFound` if the record is not in the store.
    pub fn toggle_select(&mut self, id: RecordId, selected: bool) -> GridResult<bool> {
        Features::require(self.features.selectable, "selectable")?;
        if !self.store.contains(id) {
            return Err(GridError::not_found(id));
        }
        Ok(self.selection.toggle(id, selected))
    }

    /// Marks or unmarks every record in the store.
    pub fn select_all(&mut self, selected: bool) -> GridResult<()> {
        Features::require(self.features.selectable, "selectable")?;
        self.selection.select_all(self.store.ids(), selected);
        Ok(())
    }

    /// Unmarks everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // === Edit commands ===

    /// Opens an edit on one cell, closing any open edit first.
    ///
    /// # Errors
    ///
    /// `FeatureDisabled`, `UnknownField`, `NotEditable` or `NotFound`.
    pub fn begin_edit(&mut self, id: RecordId, field: &str) -> GridResult<PriorEditResolution> {
        Features::require(self.features.editable, "editable")?;
        if !self.column(field)?.editable {
            return Err(GridError::not_editable(field));
        }
        let prior = self.edit.begin(id, field, &mut self.store, &self.rules)?;
        if self.note_prior(&prior) {
            self.recompute();
        }
        Ok(prior)
    }

    fn note_prior(&self, prior: &PriorEditResolution) -> bool {
        match prior {
            PriorEditResolution::Committed(_) => {
                self.counters.record_update();
                true
            }
            PriorEditResolution::Discarded(edit) => {
                if edit.draft.is_some() {
                    self.counters.record_validation_failure();
                }
                false
            }
            PriorEditResolution::None => false,
        }
    }

    /// Validates the in-progress value of the open edit.
    pub fn update_draft(&mut self, value: impl Into<String>) -> GridResult<()> {
        let result = self.edit.set_draft(value, &self.rules);
        if matches!(result, Err(GridError::ValidationFailed { .. })) {
            self.counters.record_validation_failure();
        }
        result
    }

    /// Validates `value` and writes it to the cell under edit.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` leaves the store and the session untouched.
    /// `NotFound` means the record was deleted; the session is closed.
    /// `NoActiveEdit` when nothing is being edited.
    pub fn commit_edit(&mut self, value: impl Into<String>) -> GridResult<CommitOutcome> {
        match self.edit.commit(value, &mut self.store, &self.rules) {
            Ok(outcome) => {
                self.counters.record_update();
                self.recompute();
                Ok(outcome)
            }
            Err(err) => {
                if err.is_validation() {
                    self.counters.record_validation_failure();
                }
                Err(err)
            }
        }
    }

    /// Closes the open edit without writing and returns it.
    pub fn cancel_edit(&mut self) -> Option<ActiveEdit> {
        self.edit.discard()
    }

    // === Export ===

    /// Records an export would write: the selection if any, else the view.
    #[must_use]
    pub fn export_records(&self) -> Vec<Record> {
        if self.selection.is_empty() {
            self.view_records()
        } else {
            self.selection.materialize(&self.store)
        }
    }

    /// Serializes the selection, or the view if nothing is selected.
    pub fn export(&self, format: ExchangeFormat) -> GridResult<String> {
        Features::require(self.features.export, "export")?;
        let records = self.export_records();
        let text = export::export(&records, &self.columns, format)?;
        self.counters.record_export();
        debug!(format = %format, records = records.len(), "exported");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationRule;
    use regex::Regex;

    fn employees() -> Vec<Record> {
        vec![
            Record::new()
                .with("id", "EMP001")
                .with("name", "Alice")
                .with("salary", "$50,000"),
            Record::new()
                .with("id", "EMP002")
                .with("name", "Bob")
                .with("salary", "$9,000"),
        ]
    }

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("id").title("ID").editable(false),
            ColumnDescriptor::new("name").title("Name").default_value("New"),
            ColumnDescriptor::new("salary")
                .title("Salary")
                .formatter(|v| format!("{v} USD")),
        ]
    }

    fn grid() -> Grid {
        Grid::new(
            GridConfig::new()
                .columns(columns())
                .data(employees())
                .validation(RuleSet::new().with(
                    "name",
                    ValidationRule::new().required().min_length(2),
                )),
        )
        .unwrap()
    }

    fn page_names(grid: &Grid) -> Vec<String> {
        grid.snapshot()
            .rows
            .iter()
            .map(|r| r.value("name").unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn rejects_invalid_config() {
        let err = Grid::new(GridConfig::new().page_size(0)).unwrap_err();
        assert!(matches!(err, GridError::InvalidConfig { .. }));
    }

    #[test]
    fn sort_salary_numeric_then_reverse() {
        let mut grid = grid();
        assert!(grid.sort("salary").unwrap());
        assert_eq!(page_names(&grid), vec!["Bob", "Alice"]);
        grid.sort("salary").unwrap();
        assert_eq!(page_names(&grid), vec!["Alice", "Bob"]);
    }

    #[test]
    fn sort_unknown_and_unsortable() {
        let mut grid = Grid::new(
            GridConfig::new()
                .columns(vec![ColumnDescriptor::new("name").sortable(false)])
                .data(employees()),
        )
        .unwrap();
        assert!(!grid.sort("name").unwrap());
        assert!(grid.sort_state().is_none());
        assert_eq!(grid.sort("nope").unwrap_err(), GridError::unknown_field("nope"));
    }

    #[test]
    fn search_ali() {
        let mut grid = grid();
        grid.search("ali").unwrap();
        assert_eq!(page_names(&grid), vec!["Alice"]);
        grid.search("").unwrap();
        assert_eq!(grid.view_len(), 2);
    }

    #[test]
    fn delete_on_last_page_clamps() {
        let mut grid = grid();
        grid.set_page_size(1);
        assert!(grid.go_to_page(2));
        let id = grid.page_ids()[0];
        grid.delete_row(id).unwrap();
        assert_eq!(grid.current_page(), 1);
        assert_eq!(grid.view_len(), 1);
        assert_eq!(grid.snapshot().rows.len(), 1);
    }

    #[test]
    fn delete_prunes_selection_and_edit() {
        let mut grid = grid();
        let id = grid.view_ids()[0];
        grid.toggle_select(id, true).unwrap();
        grid.begin_edit(id, "name").unwrap();
        grid.delete_row(id).unwrap();
        assert!(!grid.is_selected(id));
        assert_eq!(grid.selected_count(), 0);
        assert!(grid.editing().is_none());
        assert!(grid.delete_row(id).unwrap_err().is_not_found());
    }

    #[test]
    fn selection_survives_filter() {
        let mut grid = grid();
        let alice = grid.view_ids()[0];
        grid.toggle_select(alice, true).unwrap();
        grid.search("bob").unwrap();
        assert!(grid.is_selected(alice));
        assert_eq!(grid.selected_records()[0].value("name"), "Alice");
    }

    #[test]
    fn commit_invalid_leaves_store() {
        let mut grid = grid();
        let id = grid.view_ids()[0];
        grid.begin_edit(id, "name").unwrap();
        let before = grid.data();
        let err = grid.commit_edit("A").unwrap_err();
        assert_eq!(
            err,
            GridError::validation_failed("name", "name must be at least 2 characters")
        );
        assert_eq!(grid.data(), before);
        assert!(grid.editing().is_some());
        assert_eq!(grid.stats().validation_failures, 1);

        let outcome = grid.commit_edit("Alicia").unwrap();
        assert_eq!(outcome.previous, "Alice");
        assert_eq!(grid.record(id).unwrap().value("name"), "Alicia");
        assert_eq!(grid.record(id).unwrap().value("salary"), "$50,000");
        assert_eq!(grid.stats().updates, 1);
    }

    #[test]
    fn begin_edit_checks_column() {
        let mut grid = grid();
        let id = grid.view_ids()[0];
        assert_eq!(grid.begin_edit(id, "id").unwrap_err(), GridError::not_editable("id"));
        assert_eq!(
            grid.begin_edit(id, "office").unwrap_err(),
            GridError::unknown_field("office")
        );
        assert!(grid
            .begin_edit(RecordId::new(99), "name")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn begin_edit_commits_prior_draft() {
        let mut grid = grid();
        let ids = grid.view_ids().to_vec();
        grid.begin_edit(ids[0], "name").unwrap();
        grid.update_draft("Alicia").unwrap();
        let prior = grid.begin_edit(ids[1], "name").unwrap();
        assert!(matches!(prior, PriorEditResolution::Committed(_)));
        assert_eq!(grid.record(ids[0]).unwrap().value("name"), "Alicia");

        assert!(grid.update_draft("").unwrap_err().is_validation());
        let prior = grid.begin_edit(ids[0], "salary").unwrap();
        assert!(matches!(prior, PriorEditResolution::Discarded(_)));
        assert_eq!(grid.record(ids[1]).unwrap().value("name"), "Bob");
    }

    #[test]
    fn cancel_edit_returns_original() {
        let mut grid = grid();
        let id = grid.view_ids()[1];
        grid.begin_edit(id, "name").unwrap();
        let edit = grid.cancel_edit().unwrap();
        assert_eq!(edit.original_value, "Bob");
        assert!(grid.cancel_edit().is_none());
        assert_eq!(grid.commit_edit("x").unwrap_err(), GridError::NoActiveEdit);
    }

    #[test]
    fn add_row_assigns_display_id() {
        let mut grid = grid();
        grid.search("bob").unwrap();
        grid.set_page_size(1);
        let added = grid.add_row().unwrap();
        assert_eq!(added.display_id.as_deref(), Some("EMP003"));
        assert_eq!(added.editing.as_deref(), Some("name"));
        assert_eq!(grid.search_query(), "");
        assert_eq!(grid.current_page(), 1);
        assert_eq!(grid.page_ids(), &[added.id]);

        let record = grid.record(added.id).unwrap();
        assert_eq!(record.value("name"), "New");
        assert_eq!(record.value("salary"), "");
        assert!(grid.snapshot().rows[0].cells[1].editing);
        assert_eq!(grid.stats().inserts, 1);
    }

    #[test]
    fn add_row_disabled() {
        let mut grid = Grid::new(GridConfig::new().editable(false)).unwrap();
        assert_eq!(
            grid.add_row().unwrap_err(),
            GridError::feature_disabled("editable")
        );
    }

    #[test]
    fn two_step_deletion() {
        let mut grid = grid();
        let ids = grid.view_ids().to_vec();
        let proposal = grid.propose_deletion(DeletionTarget::Row(ids[0])).unwrap();
        assert_eq!(proposal.description, "Delete Alice?");
        assert_eq!(grid.len(), 2);

        grid.select_all(true).unwrap();
        let bulk = grid.propose_deletion(DeletionTarget::Selected).unwrap();
        assert_eq!(bulk.description, "Delete 2 selected row(s)?");

        assert_eq!(grid.confirm_deletion(&proposal).unwrap(), 1);
        assert_eq!(grid.confirm_deletion(&bulk).unwrap(), 1);
        assert!(grid.is_empty());
        assert_eq!(grid.selected_count(), 0);
        assert_eq!(grid.stats().deletes, 2);
    }

    #[test]
    fn deletion_label_fallbacks() {
        let mut grid = Grid::new(GridConfig::new().columns(columns())).unwrap();
        grid.set_data(vec![
            Record::new().with("id", "EMP010"),
            Record::new().with("salary", "1"),
        ]);
        let ids = grid.view_ids().to_vec();
        let first = grid.propose_deletion(DeletionTarget::Row(ids[0])).unwrap();
        let second = grid.propose_deletion(DeletionTarget::Row(ids[1])).unwrap();
        assert_eq!(first.description, "Delete EMP010?");
        assert_eq!(second.description, "Delete this row?");
    }

    #[test]
    fn delete_selected_counts() {
        let mut grid = grid();
        grid.select_all(true).unwrap();
        assert_eq!(grid.delete_selected().unwrap(), 2);
        assert_eq!(grid.delete_selected().unwrap(), 0);
        assert_eq!(grid.page_count(), 1);
    }

    #[test]
    fn export_prefers_selection() {
        let mut grid = grid();
        let csv = grid.export(ExchangeFormat::Delimited).unwrap();
        assert_eq!(
            csv,
            "\"ID\",\"Name\",\"Salary\"\n\"EMP001\",\"Alice\",\"$50,000\"\n\"EMP002\",\"Bob\",\"$9,000\""
        );

        let bob = grid.view_ids()[1];
        grid.toggle_select(bob, true).unwrap();
        let csv = grid.export(ExchangeFormat::Delimited).unwrap();
        assert_eq!(csv, "\"ID\",\"Name\",\"Salary\"\n\"EMP002\",\"Bob\",\"$9,000\"");
        assert_eq!(grid.stats().exports, 2);
    }

    #[test]
    fn export_follows_view_order() {
        let mut grid = grid();
        grid.sort("salary").unwrap();
        let names: Vec<_> = grid
            .export_records()
            .iter()
            .map(|r| r.value("name").to_string())
            .collect();
        assert_eq!(names, vec!["Bob", "Alice"]);
    }

    #[test]
    fn feature_flags_gate_commands() {
        let mut grid = Grid::new(
            GridConfig::new()
                .columns(columns())
                .data(employees())
                .search(false)
                .sortable(false)
                .selectable(false)
                .export(false),
        )
        .unwrap();
        assert!(grid.search("a").is_err());
        assert!(grid.sort("name").is_err());
        assert!(grid.select_all(true).is_err());
        assert!(grid.toggle_select(grid.view_ids()[0], true).is_err());
        assert_eq!(
            grid.export(ExchangeFormat::Structured).unwrap_err(),
            GridError::feature_disabled("export")
        );
    }

    #[test]
    fn pagination_disabled_single_page() {
        let data: Vec<Record> = (0..25)
            .map(|i| Record::new().with("name", format!("n{i}")))
            .collect();
        let mut grid = Grid::new(
            GridConfig::new()
                .columns(vec![ColumnDescriptor::new("name")])
                .data(data)
                .pagination(false),
        )
        .unwrap();
        assert_eq!(grid.page_count(), 1);
        assert_eq!(grid.page_ids().len(), 25);
        assert!(!grid.go_to_page(2));
        assert_eq!(grid.page_range(), PageRange { start: 1, end: 25, total: 25 });
    }

    #[test]
    fn snapshot_contents() {
        let mut grid = grid();
        grid.sort("name").unwrap();
        let alice = grid.view_ids()[0];
        grid.toggle_select(alice, true).unwrap();
        let snap = grid.snapshot();
        assert_eq!(snap.total_records, 2);
        assert_eq!(snap.page_count, 1);
        assert_eq!(snap.page_window, vec![1]);
        assert_eq!(snap.columns[1].sorted, Some(crate::SortDirection::Asc));
        assert!(!snap.columns[0].editable);
        assert!(snap.rows[0].selected);
        assert!(!snap.all_selected);
        assert_eq!(snap.rows[0].cells[2].display, "$50,000 USD");
        assert_eq!(snap.range, PageRange { start: 1, end: 2, total: 2 });
    }

    #[test]
    fn set_data_resets() {
        let mut grid = grid();
        grid.select_all(true).unwrap();
        grid.set_page_size(1);
        grid.go_to_page(2);
        grid.set_data(vec![Record::new().with("name", "Zed")]);
        assert_eq!(grid.selected_count(), 0);
        assert_eq!(grid.current_page(), 1);
        assert_eq!(grid.data().len(), 1);
    }

    #[test]
    fn validate_without_edit() {
        let grid = grid();
        assert!(!grid.validate("name", " ").valid);
        assert!(grid.validate("salary", "").valid);
        let rules = RuleSet::new().with(
            "salary",
            ValidationRule::new().pattern(Regex::new(r"^\$[\d,]+$").unwrap()),
        );
        assert!(crate::validate("salary", "$1,000", &rules).valid);
    }
}
