//! # Datagrid Codec
//!
//! Record type and exchange formats for datagrid.
//!
//! This crate provides:
//! - [`Record`], an ordered field-name → text mapping
//! - Delimited text (CSV) with every field quoted and quotes doubled
//! - Structured text (JSON) pretty-printed with a 2-space indent
//!
//! Both formats can be decoded again, so exported data can be reloaded.
//!
//! ## Usage
//!
//! ```
//! use datagrid_codec::{decode_delimited_table, encode_delimited, Record};
//!
//! let alice = Record::new().with("id", "EMP001").with("name", "Alice");
//! let text = encode_delimited(&["ID", "Name"], vec![vec![alice.value("id"), alice.value("name")]]).unwrap();
//! assert_eq!(text, "\"ID\",\"Name\"\n\"EMP001\",\"Alice\"");
//!
//! let table = decode_delimited_table(&text).unwrap();
//! assert_eq!(table.rows[0], vec!["EMP001", "Alice"]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod encoder;
mod error;
mod format;
mod record;

pub use decoder::{decode_delimited, decode_delimited_table, decode_structured, DelimitedTable};
pub use encoder::{encode_delimited, encode_structured};
pub use error::{CodecError, CodecResult};
pub use format::ExchangeFormat;
pub use record::Record;

/// Decodes records from text in the given format.
pub fn decode(format: ExchangeFormat, text: &str) -> CodecResult<Vec<Record>> {
    match format {
        ExchangeFormat::Delimited => decode_delimited(text),
        ExchangeFormat::Structured => decode_structured(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_dispatches_on_format() {
        let csv = decode(ExchangeFormat::Delimited, "a,b\n1,2").unwrap();
        let json = decode(ExchangeFormat::Structured, r#"[{"a": "1", "b": 2}]"#).unwrap();
        assert_eq!(csv, json);
    }
}
