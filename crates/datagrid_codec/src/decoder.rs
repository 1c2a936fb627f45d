//! Decoders for delimited and structured text.

use crate::error::{CodecError, CodecResult};
use crate::record::Record;
use csv::ReaderBuilder;

/// A parsed delimited document: header cells plus data rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DelimitedTable {
    /// Header cells in column order.
    pub headers: Vec<String>,
    /// Data rows, each with exactly `headers.len()` fields.
    pub rows: Vec<Vec<String>>,
}

impl DelimitedTable {
    /// Converts the rows into records keyed by header cell.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        let headers = self.headers;
        self.rows
            .into_iter()
            .map(|row| headers.iter().cloned().zip(row).collect())
            .collect()
    }
}

/// Parses delimited text with a header row.
///
/// Accepts quoted and unquoted fields, `\n` or `\r\n` row terminators.
/// Rows whose field count differs from the header are rejected.
pub fn decode_delimited_table(text: &str) -> CodecResult<DelimitedTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()?
        .iter()
        .map(str::to_owned)
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result?;
        rows.push(row.iter().map(str::to_owned).collect());
    }

    Ok(DelimitedTable { headers, rows })
}

/// Parses delimited text into records keyed by the header row.
pub fn decode_delimited(text: &str) -> CodecResult<Vec<Record>> {
    Ok(decode_delimited_table(text)?.into_records())
}

/// Parses a JSON array of flat objects into records.
///
/// Scalars are converted to their text form; nested arrays or objects
/// are rejected.
pub fn decode_structured(text: &str) -> CodecResult<Vec<Record>> {
    let trimmed = text.trim_start();
    if !trimmed.starts_with('[') {
        return Err(CodecError::invalid_structure(
            "expected a JSON array of objects",
        ));
    }
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{encode_delimited, encode_structured};

    #[test]
    fn delimited_reads_quoted_output() {
        let text = "\"ID\",\"Name\"\n\"EMP001\",\"Al \"\"the\"\" pal\"\n\"EMP002\",\"Bob, Jr\"";
        let table = decode_delimited_table(text).unwrap();
        assert_eq!(table.headers, vec!["ID", "Name"]);
        assert_eq!(
            table.rows,
            vec![
                vec!["EMP001".to_string(), "Al \"the\" pal".to_string()],
                vec!["EMP002".to_string(), "Bob, Jr".to_string()],
            ]
        );
    }

    #[test]
    fn delimited_into_records() {
        let records = decode_delimited("id,name\r\n1,Alice\r\n2,Bob\r\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].value("name"), "Bob");
        assert_eq!(records[0].fields().collect::<Vec<_>>(), vec!["id", "name"]);
    }

    #[test]
    fn delimited_rejects_ragged_rows() {
        let err = decode_delimited_table("a,b\n1,2\n3\n").unwrap_err();
        assert!(matches!(
            err,
            CodecError::RowLength {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn delimited_encoded_values_survive() {
        let values = vec![
            vec!["$50,000", "line\nbreak"],
            vec!["\"quoted\"", ""],
        ];
        let text = encode_delimited(&["a", "b"], values.clone()).unwrap();
        let table = decode_delimited_table(&text).unwrap();
        let expected: Vec<Vec<String>> = values
            .into_iter()
            .map(|r| r.into_iter().map(str::to_owned).collect())
            .collect();
        assert_eq!(table.rows, expected);
    }

    #[test]
    fn structured_reads_back_encoded_records() {
        let records = vec![
            Record::new().with("id", "EMP001").with("salary", "$50,000"),
            Record::new().with("id", "EMP002").with("salary", "$9,000"),
        ];
        let text = encode_structured(&records).unwrap();
        assert_eq!(decode_structured(&text).unwrap(), records);
    }

    #[test]
    fn structured_rejects_non_array() {
        assert!(matches!(
            decode_structured(r#"{"id": "x"}"#),
            Err(CodecError::InvalidStructure { .. })
        ));
    }
}
