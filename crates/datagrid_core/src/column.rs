//! Column descriptors.

use std::fmt;
use std::sync::Arc;

/// Converts a raw cell value to its display text.
pub type Formatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Describes one column of the grid.
///
/// The set of column fields is the set of active fields for every
/// record: search matches against them, export writes them, and only
/// they can be sorted on or edited.
#[derive(Clone)]
pub struct ColumnDescriptor {
    /// Record field this column shows.
    pub field: String,
    /// Header text. Falls back to `field` when not set.
    pub title: Option<String>,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// Whether cells in this column accept edits.
    pub editable: bool,
    /// Preferred width hint for the renderer (e.g. `"60px"`).
    pub width: Option<String>,
    /// Value given to this field when a row is added.
    pub default_value: Option<String>,
    /// Optional display formatter.
    pub formatter: Option<Formatter>,
}

impl ColumnDescriptor {
    /// Creates a sortable, editable column for `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            title: None,
            sortable: true,
            editable: true,
            width: None,
            default_value: None,
            formatter: None,
        }
    }

    /// Sets the header title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets whether the column is sortable.
    #[must_use]
    pub fn sortable(mut self, value: bool) -> Self {
        self.sortable = value;
        self
    }

    /// Sets whether the column is editable.
    #[must_use]
    pub fn editable(mut self, value: bool) -> Self {
        self.editable = value;
        self
    }

    /// Sets the width hint.
    #[must_use]
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Sets the value used for this field in newly added rows.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets the display formatter.
    #[must_use]
    pub fn formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(f));
        self
    }

    /// Returns the header text.
    #[must_use]
    pub fn header(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.field)
    }

    /// Returns the display text for a raw value.
    #[must_use]
    pub fn format(&self, value: &str) -> String {
        match &self.formatter {
            Some(f) => f(value),
            None => value.to_owned(),
        }
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("field", &self.field)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("editable", &self.editable)
            .field("width", &self.width)
            .field("default_value", &self.default_value)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

/// Finds a column by field name.
pub(crate) fn find<'a>(columns: &'a [ColumnDescriptor], field: &str) -> Option<&'a ColumnDescriptor> {
    columns.iter().find(|c| c.field == field)
}
