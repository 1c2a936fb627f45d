//! Test fixtures and grid helpers.
//!
//! Provides the employee sample table used throughout the tests, its
//! validation rules, and shortcuts for building grids over it.

use datagrid_codec::Record;
use datagrid_core::{ColumnDescriptor, Grid, GridConfig, RuleSet, RuleSpec};

const EMPLOYEES: &[[&str; 6]] = &[
    ["Tiger Nixon", "System Architect", "Edinburgh", "5421", "2011/04/25", "$320,800"],
    ["Garrett Winters", "Accountant", "Tokyo", "8422", "2011/07/25", "$170,750"],
    ["Ashton Cox", "Junior Technical Author", "San Francisco", "1562", "2009/01/12", "$86,000"],
    ["Cedric Kelly", "Senior Javascript Developer", "Edinburgh", "6224", "2012/03/29", "$433,060"],
    ["Airi Satou", "Accountant", "Tokyo", "5407", "2008/11/28", "$162,700"],
    ["Brielle Williamson", "Integration Specialist", "New York", "4804", "2012/12/02", "$372,000"],
    ["Herrod Chandler", "Sales Assistant", "San Francisco", "9608", "2012/08/06", "$137,500"],
    ["Rhona Davidson", "Integration Specialist", "Tokyo", "6200", "2010/10/14", "$327,900"],
    ["Colleen Hurst", "Javascript Developer", "San Francisco", "2360", "2009/09/15", "$205,500"],
    ["Sonya Frost", "Software Engineer", "Edinburgh", "1667", "2008/12/13", "$103,600"],
    ["Jena Gaines", "Office Manager", "London", "3814", "2008/12/19", "$90,560"],
    ["Quinn Flynn", "Support Lead", "Edinburgh", "9497", "2013/03/03", "$342,000"],
];

/// The employee table's columns: a read-only `ID` and six editable ones.
#[must_use]
pub fn employee_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("id")
            .title("ID")
            .width("60px")
            .editable(false),
        ColumnDescriptor::new("name").title("Name"),
        ColumnDescriptor::new("position").title("Position"),
        ColumnDescriptor::new("office").title("Office"),
        ColumnDescriptor::new("extension").title("Extension"),
        ColumnDescriptor::new("startDate").title("Start Date"),
        ColumnDescriptor::new("salary").title("Salary"),
    ]
}

/// Twelve employee records with ids `EMP001`..`EMP012`.
#[must_use]
pub fn employee_records() -> Vec<Record> {
    EMPLOYEES
        .iter()
        .enumerate()
        .map(|(i, [name, position, office, extension, start, salary])| {
            Record::new()
                .with("id", format!("EMP{:03}", i + 1))
                .with("name", *name)
                .with("position", *position)
                .with("office", *office)
                .with("extension", *extension)
                .with("startDate", *start)
                .with("salary", *salary)
        })
        .collect()
}

/// Rules for the employee table, as JSON.
pub const EMPLOYEE_RULES_JSON: &str = r#"{
    "name": { "required": true, "minLength": 2, "maxLength": 50 },
    "position": { "required": true, "minLength": 2 },
    "office": { "required": true },
    "extension": { "pattern": "^\\d{4}$", "message": "Extension must be 4 digits" },
    "startDate": { "pattern": "^\\d{4}/\\d{2}/\\d{2}$", "message": "Date format: YYYY/MM/DD" },
    "salary": { "pattern": "^\\$[\\d,]+$", "message": "Salary format: $123,456" }
}"#;

/// Compiled employee rules.
#[must_use]
pub fn employee_rules() -> RuleSet {
    RuleSet::from_json(EMPLOYEE_RULES_JSON).expect("Employee rules must compile")
}

/// Employee rules as specs, keyed by field.
#[must_use]
pub fn employee_rule_specs() -> Vec<(String, RuleSpec)> {
    employee_rules().to_specs().into_iter().collect()
}

/// Grid configuration over the employee table.
#[must_use]
pub fn employee_config() -> GridConfig {
    GridConfig::new()
        .columns(employee_columns())
        .data(employee_records())
        .validation(employee_rules())
}

/// A grid over the employee table.
#[must_use]
pub fn employee_grid() -> Grid {
    Grid::new(employee_config()).expect("Failed to build employee grid")
}

/// Runs a test against a fresh employee grid.
///
/// # Example
///
/// ```rust
/// use datagrid_testkit::with_employee_grid;
///
/// with_employee_grid(|grid| {
///     grid.search("tokyo").unwrap();
///     assert_eq!(grid.view_len(), 3);
/// });
/// ```
pub fn with_employee_grid<F, R>(f: F) -> R
where
    F: FnOnce(&mut Grid) -> R,
{
    let mut grid = employee_grid();
    f(&mut grid)
}

/// Test scenario helpers.
pub mod scenarios {
    use super::*;

    /// Alice earning `$50,000` and Bob earning `$9,000`.
    #[must_use]
    pub fn salary_pair() -> Vec<Record> {
        vec![
            Record::new()
                .with("id", "EMP001")
                .with("name", "Alice")
                .with("salary", "$50,000"),
            Record::new()
                .with("id", "EMP002")
                .with("name", "Bob")
                .with("salary", "$9,000"),
        ]
    }

    /// Columns for [`salary_pair`].
    #[must_use]
    pub fn salary_columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("id").editable(false),
            ColumnDescriptor::new("name"),
            ColumnDescriptor::new("salary"),
        ]
    }

    /// A grid over [`salary_pair`] with the given page size.
    #[must_use]
    pub fn salary_grid(page_size: usize) -> Grid {
        Grid::new(
            GridConfig::new()
                .columns(salary_columns())
                .data(salary_pair())
                .page_size(page_size),
        )
        .expect("Failed to build salary grid")
    }

    /// A single-column grid of `count` rows named `row-0`, `row-1`, ...
    #[must_use]
    pub fn numbered_grid(count: usize, page_size: usize) -> Grid {
        let data = (0..count)
            .map(|i| Record::new().with("name", format!("row-{i}")))
            .collect();
        Grid::new(
            GridConfig::new()
                .columns(vec![ColumnDescriptor::new("name")])
                .data(data)
                .page_size(page_size),
        )
        .expect("Failed to build numbered grid")
    }
}
