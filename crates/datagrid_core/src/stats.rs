//! Grid operation counters.
//!
//! # Usage
//!
//! ```rust
//! use datagrid_core::{ColumnDescriptor, Grid, GridConfig};
//! use datagrid_codec::Record;
//!
//! let mut grid = Grid::new(
//!     GridConfig::new()
//!         .columns(vec![ColumnDescriptor::new("name")])
//!         .data(vec![Record::new().with("name", "Alice")]),
//! )?;
//! grid.search("ali")?;
//!
//! let stats = grid.stats();
//! assert_eq!(stats.inserts, 0);
//! assert!(stats.recomputes >= 2);
//! # Ok::<(), datagrid_core::GridError>(())
//! ```

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Live operation counters.
///
/// All counters are atomic so a shared handle can read them while the
/// grid itself is locked. Values only grow.
#[derive(Debug, Default)]
pub struct GridCounters {
    inserts: AtomicU64,
    updates: AtomicU64,
    deletes: AtomicU64,
    validation_failures: AtomicU64,
    recomputes: AtomicU64,
    exports: AtomicU64,
}

impl GridCounters {
    /// Creates zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_update(&self) {
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_deletes(&self, count: u64) {
        self.deletes.fetch_add(count, Ordering::Relaxed);
    }

    pub(crate) fn record_validation_failure(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_recompute(&self) {
        self.recomputes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_export(&self) {
        self.exports.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns a point-in-time copy of every counter.
    #[must_use]
    pub fn snapshot(&self) -> GridStats {
        GridStats {
            inserts: self.inserts.load(Ordering::Relaxed),
            updates: self.updates.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
            recomputes: self.recomputes.load(Ordering::Relaxed),
            exports: self.exports.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of [`GridCounters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GridStats {
    /// Records added with `add_row`.
    pub inserts: u64,
    /// Committed cell edits.
    pub updates: u64,
    /// Records removed by any delete.
    pub deletes: u64,
    /// Rejected drafts and commits.
    pub validation_failures: u64,
    /// View recomputations.
    pub recomputes: u64,
    /// Completed exports.
    pub exports: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zero() {
        assert_eq!(GridCounters::new().snapshot(), GridStats::default());
    }

    #[test]
    fn record_operations() {
        let counters = GridCounters::new();
        counters.record_insert();
        counters.record_update();
        counters.record_update();
        counters.record_deletes(3);
        counters.record_validation_failure();
        counters.record_recompute();
        counters.record_export();

        let snap = counters.snapshot();
        assert_eq!(snap.inserts, 1);
        assert_eq!(snap.updates, 2);
        assert_eq!(snap.deletes, 3);
        assert_eq!(snap.validation_failures, 1);
        assert_eq!(snap.recomputes, 1);
        assert_eq!(snap.exports, 1);
    }

    #[test]
    fn concurrent_updates() {
        use std::sync::Arc;
        use std::thread;

        let counters = Arc::new(GridCounters::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let c = Arc::clone(&counters);
                thread::spawn(move || {
                    for _ in 0..100 {
                        c.record_recompute();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(counters.snapshot().recomputes, 800);
    }
}
