//! View command implementation.

use super::{build_grid, load_records, ViewOptions};
use crate::error::CliResult;
use datagrid_core::{Grid, GridSnapshot};
use std::path::Path;
use tracing::warn;

/// Runs the view command.
pub fn run(
    path: &Path,
    options: &ViewOptions,
    page: usize,
    page_size: Option<usize>,
    format: &str,
) -> CliResult<()> {
    let records = load_records(path)?;
    let grid = open_page(build_grid(records, options)?, page, page_size);
    let snapshot = grid.snapshot();

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        _ => print!("{}", render_text(&snapshot)),
    }
    Ok(())
}

fn open_page(mut grid: Grid, page: usize, page_size: Option<usize>) -> Grid {
    if let Some(size) = page_size {
        if !grid.set_page_size(size) {
            warn!(size, "ignoring page size");
        }
    }
    if page != grid.current_page() && !grid.go_to_page(page) {
        warn!(page, pages = grid.page_count(), "page out of range, showing page 1");
    }
    grid
}

/// Renders the current page as an aligned text table.
#[must_use]
pub fn render_text(snapshot: &GridSnapshot) -> String {
    let mut widths: Vec<usize> = snapshot
        .columns
        .iter()
        .map(|c| c.title.chars().count())
        .collect();
    for row in &snapshot.rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.display.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(text, width)| format!("{text:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(snapshot.columns.iter().map(|c| c.title.as_str()).collect()));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &snapshot.rows {
        out.push_str(&line(row.cells.iter().map(|c| c.display.as_str()).collect()));
        out.push('\n');
    }
    out.push_str(&format!(
        "Showing {}-{} of {} entries (page {} of {})\n",
        snapshot.range.start,
        snapshot.range.end,
        snapshot.range.total,
        snapshot.current_page,
        snapshot.page_count
    ));
    out
}
