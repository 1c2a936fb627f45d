//! Filter and sort stages of the view.

use crate::column::ColumnDescriptor;
use crate::record::RecordStore;
use crate::types::{RecordId, SortDirection, SortState};
use datagrid_codec::Record;
use std::cmp::Ordering;
use tracing::trace;

/// Returns true if any column value contains `needle_lower`.
///
/// `needle_lower` must already be lower-cased. Values are lower-cased
/// before matching; fields missing from the record read as empty.
#[must_use]
pub fn matches_query(record: &Record, columns: &[ColumnDescriptor], needle_lower: &str) -> bool {
    columns.iter().any(|col| {
        record
            .value(&col.field)
            .to_lowercase()
            .contains(needle_lower)
    })
}

/// Extracts the numeric sort key of a value.
///
/// Every character other than ASCII digits, `.` and `-` is removed,
/// then the longest leading decimal number is parsed (`"$50,000"` →
/// 50000, `"1.2.3"` → 1.2). Returns `None` when no digits lead the
/// stripped text.
#[must_use]
pub fn numeric_key(value: &str) -> Option<f64> {
    let stripped: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let bytes = stripped.as_bytes();
    let len = bytes.len();

    let mut i = usize::from(bytes.first() == Some(&b'-'));
    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut end = i;
    if i < len && bytes[i] == b'.' {
        let mut k = i + 1;
        while k < len && bytes[k].is_ascii_digit() {
            k += 1;
        }
        if k > i + 1 {
            end = k;
        }
    }

    let frac_digits = end.saturating_sub(i + 1);
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    stripped[..end].parse().ok()
}

/// Compares two cell values for sorting.
///
/// Both values numeric (see [`numeric_key`]): numeric comparison.
/// Otherwise: case-sensitive lexicographic comparison of the raw text.
#[must_use]
pub fn compare_values(a: &str, b: &str) -> Ordering {
    compare_keys((a, numeric_key(a)), (b, numeric_key(b)))
}

fn compare_keys(a: (&str, Option<f64>), b: (&str, Option<f64>)) -> Ordering {
    match (a.1, b.1) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.0.cmp(b.0),
    }
}

/// Stable bottom-up merge sort returning a permutation of `0..len`.
///
/// The mixed numeric/text comparison is not transitive, so the std
/// sorts (which may panic on such comparators) are not used here.
fn stable_order<F>(len: usize, mut cmp: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let mut order: Vec<usize> = (0..len).collect();
    let mut buf = vec![0; len];
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut i, mut j, mut k) = (start, mid, start);
            while i < mid && j < end {
                if cmp(order[j], order[i]) == Ordering::Less {
                    buf[k] = order[j];
                    j += 1;
                } else {
                    buf[k] = order[i];
                    i += 1;
                }
                k += 1;
            }
            let rest_left = mid - i;
            buf[k..k + rest_left].copy_from_slice(&order[i..mid]);
            k += rest_left;
            buf[k..k + (end - j)].copy_from_slice(&order[j..end]);
            start = end;
        }
        std::mem::swap(&mut order, &mut buf);
        width *= 2;
    }
    order
}

/// Search and sort parameters, and the computation of the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewPipeline {
    search_query: String,
    sort: Option<SortState>,
}

impl ViewPipeline {
    /// Creates a pipeline with no search and no sort.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current search text.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Replaces the search text.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Returns the active sort, if any.
    #[must_use]
    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Applies a header click on `field`.
    ///
    /// Clicking the active field flips the direction; clicking another
    /// field sorts it ascending.
    pub fn toggle_sort(&mut self, field: &str) -> &SortState {
        let next = match self.sort.take() {
            Some(current) if current.field == field => SortState {
                direction: current.direction.toggled(),
                ..current
            },
            _ => SortState::ascending(field),
        };
        self.sort.insert(next)
    }

    /// Derives the view sequence from the store.
    ///
    /// The result lists each retained record once, filtered by the
    /// search text and then ordered by the sort key. Without a sort key
    /// the store order is kept.
    #[must_use]
    pub fn compute(&self, store: &RecordStore, columns: &[ColumnDescriptor]) -> Vec<RecordId> {
        let rows: Vec<(RecordId, &Record)> = if self.search_query.trim().is_empty() {
            store.iter().map(|s| (s.id, &s.record)).collect()
        } else {
            let needle = self.search_query.to_lowercase();
            store
                .iter()
                .filter(|s| matches_query(&s.record, columns, &needle))
                .map(|s| (s.id, &s.record))
                .collect()
        };

        let view: Vec<RecordId> = match &self.sort {
            None => rows.iter().map(|(id, _)| *id).collect(),
            Some(sort) => {
                let keys: Vec<(&str, Option<f64>)> = rows
                    .iter()
                    .map(|(_, record)| {
                        let value = record.value(&sort.field);
                        (value, numeric_key(value))
                    })
                    .collect();
                let order = stable_order(keys.len(), |a, b| {
                    let ord = compare_keys(keys[a], keys[b]);
                    match sort.direction {
                        SortDirection::Asc => ord,
                        SortDirection::Desc => ord.reverse(),
                    }
                });
                order.into_iter().map(|i| rows[i].0).collect()
            }
        };

        trace!(
            records = store.len(),
            view = view.len(),
            query = %self.search_query,
            "view recomputed"
        );
        view
    }
}
