//! Grid configuration.

use crate::column::ColumnDescriptor;
use crate::error::{GridError, GridResult};
use crate::validation::RuleSet;
use datagrid_codec::Record;
use std::collections::HashSet;

/// How `add_row` derives the display identifier of a new row.
///
/// The numeric part of every existing value of `field` is extracted
/// (all non-digits removed); the new row gets `prefix` followed by the
/// maximum plus one, zero-padded to `width` digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayIdConfig {
    /// Field holding the display identifier.
    pub field: String,
    /// Text placed before the number.
    pub prefix: String,
    /// Minimum number of digits.
    pub width: usize,
}

impl Default for DisplayIdConfig {
    fn default() -> Self {
        Self {
            field: "id".to_string(),
            prefix: "EMP".to_string(),
            width: 3,
        }
    }
}

impl DisplayIdConfig {
    /// Formats the identifier for `number`.
    #[must_use]
    pub fn format(&self, number: u64) -> String {
        format!("{}{:0width$}", self.prefix, number, width = self.width)
    }
}

/// Configuration for constructing a grid.
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Column descriptors, in display order.
    pub columns: Vec<ColumnDescriptor>,
    /// Initial records, in store order.
    pub data: Vec<Record>,
    /// Rows per page.
    pub page_size: usize,
    /// Page sizes a renderer should offer.
    pub page_size_options: Vec<usize>,
    /// Whether sorting is enabled.
    pub sortable: bool,
    /// Whether adding rows and editing cells is enabled.
    pub editable: bool,
    /// Whether rows can be selected.
    pub selectable: bool,
    /// Whether the view is split into pages.
    pub pagination: bool,
    /// Whether free-text search is enabled.
    pub search: bool,
    /// Whether export is enabled.
    pub export: bool,
    /// Per-field validation rules.
    pub validation: RuleSet,
    /// Display identifier assignment for new rows. `None` disables it.
    pub display_id: Option<DisplayIdConfig>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            data: Vec::new(),
            page_size: 10,
            page_size_options: vec![5, 10, 20, 50],
            sortable: true,
            editable: true,
            selectable: true,
            pagination: true,
            search: true,
            export: true,
            validation: RuleSet::new(),
            display_id: Some(DisplayIdConfig::default()),
        }
    }
}

impl GridConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the column descriptors.
    #[must_use]
    pub fn columns(mut self, columns: Vec<ColumnDescriptor>) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the initial records.
    #[must_use]
    pub fn data(mut self, data: Vec<Record>) -> Self {
        self.data = data;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Sets the page sizes offered to the user.
    #[must_use]
    pub fn page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options;
        self
    }

    /// Sets whether sorting is enabled.
    #[must_use]
    pub const fn sortable(mut self, value: bool) -> Self {
        self.sortable = value;
        self
    }

    /// Sets whether editing is enabled.
    #[must_use]
    pub const fn editable(mut self, value: bool) -> Self {
        self.editable = value;
        self
    }

    /// Sets whether selection is enabled.
    #[must_use]
    pub const fn selectable(mut self, value: bool) -> Self {
        self.selectable = value;
        self
    }

    /// Sets whether pagination is enabled.
    #[must_use]
    pub const fn pagination(mut self, value: bool) -> Self {
        self.pagination = value;
        self
    }

    /// Sets whether search is enabled.
    #[must_use]
    pub const fn search(mut self, value: bool) -> Self {
        self.search = value;
        self
    }

    /// Sets whether export is enabled.
    #[must_use]
    pub const fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }

    /// Sets the validation rules.
    #[must_use]
    pub fn validation(mut self, rules: RuleSet) -> Self {
        self.validation = rules;
        self
    }

    /// Sets display identifier assignment.
    #[must_use]
    pub fn display_id(mut self, display_id: Option<DisplayIdConfig>) -> Self {
        self.display_id = display_id;
        self
    }

    /// Checks the configuration for inconsistencies.
    pub fn validate(&self) -> GridResult<()> {
        if self.page_size == 0 {
            return Err(GridError::invalid_config("page_size must be greater than 0"));
        }
        if self.page_size_options.contains(&0) {
            return Err(GridError::invalid_config(
                "page_size_options must not contain 0",
            ));
        }
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.field.as_str()) {
                return Err(GridError::invalid_config(format!(
                    "duplicate column field: {}",
                    column.field
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GridConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.page_size_options, vec![5, 10, 20, 50]);
        assert!(config.sortable && config.editable && config.selectable);
        assert!(config.pagination && config.search && config.export);
        assert!(config.validation.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_pattern() {
        let config = GridConfig::new()
            .page_size(25)
            .search(false)
            .display_id(None);

        assert_eq!(config.page_size, 25);
        assert!(!config.search);
        assert!(config.display_id.is_none());
    }

    #[test]
    fn rejects_zero_page_size() {
        let err = GridConfig::new().page_size(0).validate().unwrap_err();
        assert!(matches!(err, GridError::InvalidConfig { .. }));
    }

    #[test]
    fn rejects_duplicate_fields() {
        let config = GridConfig::new().columns(vec![
            ColumnDescriptor::new("id"),
            ColumnDescriptor::new("id"),
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn display_id_format() {
        let display = DisplayIdConfig::default();
        assert_eq!(display.format(7), "EMP007");
        assert_eq!(display.format(1234), "EMP1234");
    }
}
