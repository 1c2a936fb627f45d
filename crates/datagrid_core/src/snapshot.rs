//! Immutable render snapshot.
//!
//! A [`GridSnapshot`] is everything a presentation layer needs to draw
//! the grid: the current page's rows with per-cell display text, the
//! paging bar, sort markers and selection flags.

use crate::edit::ActiveEdit;
use crate::types::{RecordId, SortDirection, SortState};
use crate::view::PageRange;
use serde::Serialize;

/// One column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSnapshot {
    /// Record field.
    pub field: String,
    /// Header text.
    pub title: String,
    /// Whether the header can be clicked to sort.
    pub sortable: bool,
    /// Whether cells accept edits.
    pub editable: bool,
    /// Width hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Direction marker if this is the sort column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted: Option<SortDirection>,
}

/// One cell of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellSnapshot {
    /// Record field.
    pub field: String,
    /// Stored value.
    pub value: String,
    /// Value after the column formatter.
    pub display: String,
    /// Whether this cell is under edit.
    pub editing: bool,
}

/// One row of the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowSnapshot {
    /// Record identity.
    pub id: RecordId,
    /// Whether the row is selected.
    pub selected: bool,
    /// Cells in column order.
    pub cells: Vec<CellSnapshot>,
}

impl RowSnapshot {
    /// Returns the stored value of `field`.
    #[must_use]
    pub fn value(&self, field: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.field == field)
            .map(|c| c.value.as_str())
    }
}

/// Point-in-time state of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSnapshot {
    /// Column headers.
    pub columns: Vec<ColumnSnapshot>,
    /// Rows of the current page.
    pub rows: Vec<RowSnapshot>,
    /// Records in the store.
    pub total_records: usize,
    /// Records in the view.
    pub view_len: usize,
    /// Current page (1-based).
    pub current_page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Number of pages, at least 1.
    pub page_count: usize,
    /// Page numbers for the paging bar.
    pub page_window: Vec<usize>,
    /// "Showing start-end of total".
    pub range: PageRange,
    /// Page sizes to offer.
    pub page_size_options: Vec<usize>,
    /// Active sort.
    pub sort: Option<SortState>,
    /// Current search text.
    pub search_query: String,
    /// Number of selected records.
    pub selected_count: usize,
    /// Whether every record in the store is selected.
    pub all_selected: bool,
    /// Open edit session.
    pub editing: Option<ActiveEdit>,
}

impl GridSnapshot {
    /// Identities of the rows on the current page.
    #[must_use]
    pub fn row_ids(&self) -> Vec<RecordId> {
        self.rows.iter().map(|r| r.id).collect()
    }

    /// Returns the row for `id` if it is on the current page.
    #[must_use]
    pub fn row(&self, id: RecordId) -> Option<&RowSnapshot> {
        self.rows.iter().find(|r| r.id == id)
    }
}
