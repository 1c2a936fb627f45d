//! # Datagrid Core
//!
//! Grid state engine for tabular data.
//!
//! This crate provides:
//! - Record store with stable, never-reused identities
//! - View pipeline (free-text filter and stable single-column sort)
//! - Pager with clamped page arithmetic
//! - Selection set keyed by identity
//! - Field validation rules
//! - Single-cell edit session
//! - Export of the selection or view to CSV or JSON
//!
//! ## Usage
//!
//! ```
//! use datagrid_core::{ColumnDescriptor, Grid, GridConfig};
//! use datagrid_codec::{ExchangeFormat, Record};
//!
//! let mut grid = Grid::new(
//!     GridConfig::new()
//!         .columns(vec![ColumnDescriptor::new("name").title("Name")])
//!         .data(vec![Record::new().with("name", "Alice"), Record::new().with("name", "Bob")]),
//! )?;
//!
//! grid.search("ali")?;
//! assert_eq!(grid.view_len(), 1);
//! assert_eq!(grid.export(ExchangeFormat::Delimited)?, "\"Name\"\n\"Alice\"");
//! # Ok::<(), datagrid_core::GridError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod column;
mod config;
mod edit;
mod error;
mod export;
mod grid;
mod record;
mod selection;
mod shared;
mod snapshot;
mod stats;
mod types;
mod validation;
mod view;

pub use column::{ColumnDescriptor, Formatter};
pub use config::{DisplayIdConfig, GridConfig};
pub use edit::{ActiveEdit, CommitOutcome, EditSession, EditState, PriorEditResolution};
pub use error::{GridError, GridResult};
pub use export::{export, to_delimited_text, to_structured_text};
pub use grid::{AddedRow, DeletionProposal, DeletionTarget, Grid, PAGE_WINDOW};
pub use record::{IdGenerator, InsertPosition, RecordStore, StoredRecord};
pub use selection::SelectionSet;
pub use shared::SharedGrid;
pub use snapshot::{CellSnapshot, ColumnSnapshot, GridSnapshot, RowSnapshot};
pub use stats::{GridCounters, GridStats};
pub use types::{RecordId, SortDirection, SortState};
pub use validation::{validate, RuleSet, RuleSpec, ValidationOutcome, ValidationRule};
pub use view::{compare_values, matches_query, numeric_key, PageRange, Pager, ViewPipeline};
