//! Serialization of record subsets to exchange formats.
//!
//! The exporter holds no state; the grid decides which records to pass.

use crate::column::ColumnDescriptor;
use crate::error::GridResult;
use datagrid_codec::{encode_delimited, encode_structured, ExchangeFormat, Record};

/// Writes `records` as quoted CSV.
///
/// The header row holds the column titles; each row holds the raw
/// value of every column, in column order.
pub fn to_delimited_text(records: &[Record], columns: &[ColumnDescriptor]) -> GridResult<String> {
    let header: Vec<&str> = columns.iter().map(ColumnDescriptor::header).collect();
    let rows = records.iter().map(|record| {
        columns
            .iter()
            .map(|col| record.value(&col.field))
            .collect::<Vec<_>>()
    });
    Ok(encode_delimited(&header, rows)?)
}

/// Writes `records` as pretty-printed JSON, every field in authored
/// order.
pub fn to_structured_text(records: &[Record]) -> GridResult<String> {
    Ok(encode_structured(records)?)
}

/// Writes `records` in `format`.
pub fn export(
    records: &[Record],
    columns: &[ColumnDescriptor],
    format: ExchangeFormat,
) -> GridResult<String> {
    match format {
        ExchangeFormat::Delimited => to_delimited_text(records, columns),
        ExchangeFormat::Structured => to_structured_text(records),
    }
}
