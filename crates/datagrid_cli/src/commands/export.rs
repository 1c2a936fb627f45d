//! Export command implementation.

use super::{build_grid, load_records, ViewOptions};
use crate::error::{CliError, CliResult};
use chrono::{Local, NaiveDate};
use datagrid_codec::ExchangeFormat;
use std::path::{Path, PathBuf};
use tracing::info;

/// Returns `grid-export-YYYY-MM-DD.<ext>`.
#[must_use]
pub fn export_file_name(format: ExchangeFormat, date: NaiveDate) -> String {
    format!("grid-export-{}.{}", date.format("%Y-%m-%d"), format.extension())
}

/// Writes the view of `input` into `output_dir` and returns the file path.
pub fn write_export(
    input: &Path,
    options: &ViewOptions,
    format: ExchangeFormat,
    output_dir: &Path,
    date: NaiveDate,
) -> CliResult<PathBuf> {
    let grid = build_grid(load_records(input)?, options)?;
    let text = grid.export(format)?;
    let path = output_dir.join(export_file_name(format, date));
    std::fs::write(&path, text).map_err(|e| CliError::io(&path, e))?;
    info!(path = %path.display(), records = grid.view_len(), "export written");
    Ok(path)
}

/// Runs the export command.
pub fn run(
    input: &Path,
    options: &ViewOptions,
    format: ExchangeFormat,
    output_dir: &Path,
) -> CliResult<()> {
    let path = write_export(input, options, format, output_dir, Local::now().date_naive())?;
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn file_name_has_date_stamp() {
        assert_eq!(
            export_file_name(ExchangeFormat::Delimited, date()),
            "grid-export-2024-03-09.csv"
        );
        assert_eq!(
            export_file_name(ExchangeFormat::Structured, date()),
            "grid-export-2024-03-09.json"
        );
    }

    #[test]
    fn writes_filtered_view() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        std::fs::write(&input, "name,office\nAlice,Tokyo\nBob,London\n").unwrap();

        let options = ViewOptions {
            search: Some("lon".into()),
            ..ViewOptions::default()
        };
        let path = write_export(&input, &options, ExchangeFormat::Delimited, dir.path(), date())
            .unwrap();
        assert_eq!(path, dir.path().join("grid-export-2024-03-09.csv"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "\"name\",\"office\"\n\"Bob\",\"London\""
        );
    }

    #[test]
    fn json_export_keeps_field_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.json");
        std::fs::write(&input, r#"[{"z": "1", "a": "2"}]"#).unwrap();
        let path = write_export(
            &input,
            &ViewOptions::default(),
            ExchangeFormat::Structured,
            dir.path(),
            date(),
        )
        .unwrap();
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "[\n  {\n    \"z\": \"1\",\n    \"a\": \"2\"\n  }\n]"
        );
    }
}
