//! Encoders for delimited and structured text.

use crate::error::{CodecError, CodecResult};
use crate::record::Record;
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Encodes a header row and data rows as quoted delimited text.
///
/// Every field, header cells included, is wrapped in double quotes and
/// embedded quotes are doubled. Fields are joined by commas and rows by
/// `\n`; there is no trailing newline. An empty header yields an empty
/// string.
pub fn encode_delimited<H, R, F>(header: &[H], rows: R) -> CodecResult<String>
where
    H: AsRef<str>,
    R: IntoIterator<Item = Vec<F>>,
    F: AsRef<str>,
{
    if header.is_empty() {
        return Ok(String::new());
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(header.iter().map(|h| h.as_ref()))
        .map_err(|e| CodecError::encoding_failed(e.to_string()))?;
    for row in rows {
        writer
            .write_record(row.iter().map(|f| f.as_ref()))
            .map_err(|e| CodecError::encoding_failed(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CodecError::encoding_failed(e.to_string()))?;
    let mut text = String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Encodes records as a pretty-printed JSON array (2-space indent).
///
/// Field order within each object follows the record's authored order.
pub fn encode_structured(records: &[Record]) -> CodecResult<String> {
    serde_json::to_string_pretty(records).map_err(|e| CodecError::encoding_failed(e.to_string()))
}
