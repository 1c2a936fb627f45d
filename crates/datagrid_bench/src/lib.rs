//! Benchmark utilities.

use datagrid_codec::Record;
use datagrid_core::{ColumnDescriptor, Grid, GridConfig};
use rand::seq::SliceRandom;
use rand::Rng;

const OFFICES: &[&str] = &["Edinburgh", "Tokyo", "San Francisco", "New York", "London"];
const POSITIONS: &[&str] = &["Accountant", "Developer", "Sales Assistant", "Support Lead"];

/// Columns of the generated table.
pub fn bench_columns() -> Vec<ColumnDescriptor> {
    ["id", "name", "position", "office", "extension", "salary"]
        .into_iter()
        .map(ColumnDescriptor::new)
        .collect()
}

/// Generate `count` random employee-like records.
pub fn generate_records(count: usize) -> Vec<Record> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let name: String = (0..8)
                .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
                .collect();
            Record::new()
                .with("id", format!("EMP{:05}", i + 1))
                .with("name", name)
                .with("position", *POSITIONS.choose(&mut rng).unwrap_or(&"Accountant"))
                .with("office", *OFFICES.choose(&mut rng).unwrap_or(&"Tokyo"))
                .with("extension", format!("{:04}", rng.gen_range(0..10_000)))
                .with(
                    "salary",
                    format!("${},{:03}", rng.gen_range(20..500), rng.gen_range(0..1000)),
                )
        })
        .collect()
}

/// Build a grid over `count` random records.
pub fn generate_grid(count: usize) -> Grid {
    Grid::new(
        GridConfig::new()
            .columns(bench_columns())
            .data(generate_records(count)),
    )
    .expect("Failed to build bench grid")
}
