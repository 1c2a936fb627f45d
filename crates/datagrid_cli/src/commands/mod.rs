//! CLI command implementations.

pub mod export;
pub mod validate;
pub mod view;

use crate::error::{CliError, CliResult};
use datagrid_codec::{ExchangeFormat, Record};
use datagrid_core::{ColumnDescriptor, Grid, GridConfig};
use std::path::Path;
use tracing::debug;

/// View parameters shared by `view` and `export`.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    /// Search text.
    pub search: Option<String>,
    /// Sort field.
    pub sort: Option<String>,
    /// Sort descending.
    pub desc: bool,
}

/// Reads records from a `.csv` or `.json` file.
pub fn load_records(path: &Path) -> CliResult<Vec<Record>> {
    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| ExchangeFormat::from_extension(ext).ok())
        .ok_or_else(|| CliError::UnknownInputFormat {
            path: path.to_path_buf(),
        })?;
    let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let records = datagrid_codec::decode(format, &text).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), records = records.len(), "input loaded");
    Ok(records)
}

/// One column per field of the first record, in authored order.
#[must_use]
pub fn infer_columns(records: &[Record]) -> Vec<ColumnDescriptor> {
    records
        .first()
        .map(|first| first.fields().map(ColumnDescriptor::new).collect())
        .unwrap_or_default()
}

/// Builds a grid over `records` and applies `options`.
pub fn build_grid(records: Vec<Record>, options: &ViewOptions) -> CliResult<Grid> {
    let columns = infer_columns(&records);
    let mut grid = Grid::new(GridConfig::new().columns(columns).data(records))?;
    if let Some(query) = &options.search {
        grid.search(query.as_str())?;
    }
    if let Some(field) = &options.sort {
        grid.sort(field)?;
        if options.desc {
            grid.sort(field)?;
        }
    }
    Ok(grid)
}
